use std::path::PathBuf;

use jobsearch_app::platform::{self, config, logging};
use jobsearch_logging::{jobsearch_info, jobsearch_warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILENAME));

    let loaded = config::load_config(&config_path);
    let app_config = loaded.as_ref().cloned().unwrap_or_default();
    logging::initialize(app_config.log);

    match &loaded {
        Ok(_) => jobsearch_info!("Loaded config from {:?}", config_path),
        Err(err) if err.is_not_found() => {
            jobsearch_info!("No config at {:?}; using defaults", config_path)
        }
        Err(err) => jobsearch_warn!("Ignoring config {:?}: {}", config_path, err),
    }

    platform::run_app(app_config).await
}
