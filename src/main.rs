use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;
use user_catalog::catalog::render::render;
use user_catalog::catalog::section::Catalog;
use user_catalog::core::config::Config;
use user_catalog::core::state::CatalogState;
use user_catalog::core::tracing_init::init_tracing;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'",
            config_path.display()
        ))?;

    init_tracing(&config.logging);

    info!(
        config_path = %config_path.display(),
        output = %config.catalog.output,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "User catalog starting"
    );

    let output = config.catalog.output.clone();
    let state = CatalogState::new(config);

    let catalog = Catalog::build(&state)?;
    let rendered = render(&catalog, &output)
        .context("Failed to render catalog")?;

    print!("{}", rendered);

    info!(
        sections = catalog.sections.len(),
        users = state.user_store.len(),
        "User catalog finished"
    );

    Ok(())
}
