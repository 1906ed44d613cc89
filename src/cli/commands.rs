pub mod config;
pub mod export;
pub mod show;
pub mod summary;
pub mod watch;

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::AppResult;

pub(crate) fn client(cfg: &Config) -> AppResult<ApiClient> {
    ApiClient::new(&cfg.api_base_url, cfg.request_timeout())
}
