use std::path::PathBuf;

use clap::Parser;

use crate::render::OutputFormat;

fn about_message() -> String {
    format!(
        "Converts application environment variables into user-provided services\nVersion: {}",
        env!("CARGO_PKG_VERSION")
    )
}

fn footer_message() -> String {
    "Variables defined with the same value by two or more applications go to the shared service;\n\
     everything else stays in a per-application service. Nothing on the platform is changed."
        .to_string()
}

#[derive(Parser, Clone, Debug)]
#[clap(
    name = "ups-util",
    about = about_message(),
    version,
    after_help = footer_message()
)]
pub struct Cli {
    /// Applications to inspect (default: every application in the targeted space)
    #[clap(value_name = "APP_NAME")]
    pub app_names: Vec<String>,

    /// Path to a TOML configuration file
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format of the suggested services
    #[clap(long, value_enum, default_value_t = OutputFormat::Cf)]
    pub format: OutputFormat,

    /// Maximum number of environment reads in flight
    #[clap(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
