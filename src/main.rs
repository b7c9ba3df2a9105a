use anyhow::Result;

use layoutist::config::Config;
use layoutist::logger;
use layoutist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Write a commented default config and exit
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init_file_logging(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
