use mamas_kitchen::catalog::RecipeCatalog;
use mamas_kitchen::config::AppConfig;
use mamas_kitchen::state::AppState;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let catalog = RecipeCatalog::bundled()?;
    tracing::info!(
        recipes = catalog.len(),
        reply_delay_ms = config.reply_delay.as_millis() as u64,
        "starting mamas-kitchen"
    );

    mamas_kitchen::ui::launch(AppState::new(catalog, config));
    Ok(())
}
