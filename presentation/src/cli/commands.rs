//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for namecraft
#[derive(Parser, Debug)]
#[command(name = "namecraft")]
#[command(author, version, about = "Domain name suggestions from a generative-language provider")]
#[command(long_about = r#"
namecraft serves a single JSON endpoint that turns a short business
description into a list of candidate domain names.

  POST /api/generate-domains
  {"businessType": "...", "keywords": "...", "tones": ["bold"], "extension": ".com"}

The provider API key is read from GEMINI_API_KEY (or API_KEY) unless set
in the configuration file.

Configuration files are loaded from (in priority order):
1. NAMECRAFT_* environment variables (e.g. NAMECRAFT_SERVER__LISTEN_ADDR)
2. --config <path>     Explicit config file
3. ./namecraft.toml    Project-level config
4. ~/.config/namecraft/config.toml   Global config

Example:
  namecraft --listen-addr 0.0.0.0:5000
  namecraft --config deploy/namecraft.toml -v
"#)]
pub struct Cli {
    /// Address to listen on (overrides `server.listen_addr`)
    #[arg(short, long, value_name = "ADDR")]
    pub listen_addr: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines (overrides `logging.json`)
    #[arg(long)]
    pub log_json: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log level implied by `-v`, if any
    pub fn verbosity_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
