use anyhow::Context;
use dotenv::dotenv;
use routine_builder::{
    api::CompletionClient,
    app::App,
    catalog::CatalogSource,
    config::load_config,
    logging::init_logging,
    runtime::{run_ui, EffectRunner},
};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = load_config().context("failed to load configuration")?;
    let _logger = init_logging(&config.log_level, &config.log_dir())
        .context("failed to initialise logging")?;

    if !config.has_api_key() {
        log::error!(
            "OPENAI_API_KEY is not defined. Set it in the environment, a .env file, or the config file."
        );
    }

    let catalog = CatalogSource::parse(&config.catalog);
    log::info!(
        "starting with catalog {:?}, model {} at {}",
        catalog,
        config.model,
        config.api_url
    );

    let http = reqwest::Client::new();
    let completions = CompletionClient::new(http.clone(), &config);
    let (tx, rx) = mpsc::unbounded_channel();
    let runner = EffectRunner::new(http, catalog, completions, tx);

    run_ui(App::new(&config), runner, rx)
        .await
        .context("terminal UI failed")?;

    log::info!("exiting");
    Ok(())
}
