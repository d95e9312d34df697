use anyhow::Result;
use clap::Parser;
use todolist::cli::Cli;
use todolist::config::Config;
use todolist::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.generate_config {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    let logger = Logger::from_config(config.logging.enabled)?;

    // Run the TUI application
    todolist::ui::run_app(config, logger).await
}
