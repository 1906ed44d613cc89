use crate::core::filter::StatusFilter;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for attendash
#[derive(Parser)]
#[command(
    name = "attendash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal attendance dashboard: live roster, alerts and XLSX reports from the attendance API",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL from the configuration
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryPeriod {
    Daily,
    #[default]
    Weekly,
    Monthly,
    /// Week-to-date hours per staff member
    Staff,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch once and print the dashboard
    Show {
        #[arg(long, short, help = "Only show staff whose name contains this text")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,
    },

    /// Keep the dashboard on screen, refreshing periodically (Ctrl-C to stop)
    Watch {
        #[arg(long, short, help = "Only show staff whose name contains this text")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,
    },

    /// Export today's report
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", conflicts_with = "dir")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "DIR",
            help = "Directory for Attendance_Report_<date>.<ext> (default: export_dir from config)"
        )]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,

        #[arg(long, help = "Print the report sheets instead of writing a file")]
        preview: bool,
    },

    /// Print daily, weekly, monthly or per-staff summaries
    Summary {
        #[arg(long, short, value_enum, default_value = "weekly")]
        period: SummaryPeriod,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file if none exists")]
        init: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },
}
