//! `taskhint serve` command

use taskhint::server;
use taskhint_core::config::ServiceConfig;
use taskhint_core::error::Result;

pub async fn execute(config: ServiceConfig, bind: Option<&str>) -> Result<()> {
    let addr = bind.unwrap_or(&config.bind).to_string();
    server::serve(config, &addr).await
}
