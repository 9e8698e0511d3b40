//! Command-line and environment configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use clap::Parser;
use messages::endpoint::{DEFAULT_ENDPOINT_PATH, endpoint_url_from_origin};

use crate::error::ClientError;
use crate::terminal::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "rulechat", about = "Terminal chat client for the rule generator endpoint")]
pub struct Cli {
    /// Origin of the page that would host the widget; picks ws/wss and host.
    #[arg(long, env = "RULECHAT_ORIGIN", default_value = "http://localhost:8080")]
    pub origin: String,

    #[arg(long, env = "RULECHAT_ENDPOINT_PATH", default_value = DEFAULT_ENDPOINT_PATH)]
    pub endpoint_path: String,

    /// Print code blocks without ANSI highlighting.
    #[arg(long, env = "RULECHAT_NO_COLOR", default_value_t = false)]
    pub no_color: bool,
}

impl Cli {
    /// Websocket URL derived from `--origin` and `--endpoint-path`.
    pub fn endpoint_url(&self) -> Result<String, ClientError> {
        Ok(endpoint_url_from_origin(&self.origin, &self.endpoint_path)?)
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Plain } else { ColorMode::Ansi }
    }
}
