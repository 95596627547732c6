use std::time::Duration;

use clap::Parser;

/// Request bodies (XLSForm uploads included) are capped at 10 MiB.
pub const PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "forms-host",
    version,
    about = "Serves the forms manager UI and forwards its API calls to the REST backend"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "FORMS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "FORMS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the REST backend that owns `/api/forms`
    #[arg(long, env = "FORMS_API_UPSTREAM", default_value = "http://127.0.0.1:8000")]
    pub api_upstream: String,

    /// Seconds to wait for the REST backend before answering 502
    #[arg(long, env = "FORMS_UPSTREAM_TIMEOUT", default_value_t = 30)]
    pub upstream_timeout: u64,

    /// Do not open a browser window on start
    #[arg(long, env = "FORMS_NO_BROWSER")]
    pub no_browser: bool,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}
