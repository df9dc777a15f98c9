use anyhow::Result;
use homework_agent::{logging, Config, Poller, UreqTransport};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Cannot start without configuration");
            return Err(err.into());
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let start = chrono::Utc::now().timestamp();
    let mut poller = Poller::new(&config, UreqTransport::new(), start);
    poller.run()
}
