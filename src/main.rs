use anyhow::Context;
use catalog_browser::cli::Cli;
use catalog_browser::config::Config;
use catalog_browser::logging::init_tracing;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    catalog_browser::ui::run(config)
}
