use std::path::PathBuf;

use clap::Parser;

/// Display-Name: type a first and last name, submit, and see the full name
#[derive(Parser, Debug, Clone)]
#[command(name = "display-name")]
#[command(version)]
#[command(about = "Terminal form that composes a full name from first and last name", long_about = None)]
pub struct Cli {
    /// Directory holding config.toml and theme.toml
    #[arg(short = 'c', long, value_name = "DIR", env = "DISPLAY_NAME_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config.toml.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log file path. Overrides config.toml.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Submit without checking that required fields are filled in
    #[arg(long, default_value_t = false)]
    pub novalidate: bool,

    /// Built-in theme to use instead of theme.toml (default, vibrant)
    #[arg(long)]
    pub theme: Option<String>,

    /// Write default config files to the config directory and exit
    #[arg(long, default_value_t = false)]
    pub write_default_config: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
