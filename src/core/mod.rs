pub mod alerts;
pub mod calculator;
pub mod dashboard;
pub mod filter;
pub mod logic;
pub mod poller;
pub mod snapshot;
pub mod stat_cards;

#[cfg(test)]
pub(crate) mod fake;
