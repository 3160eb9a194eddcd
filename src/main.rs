// Entrypoint for the catalog CLI.
// - Keeps `main` small: build the config, start file logging, hand off to
//   the menu loop.

use catalog_cli::{config::Config, logging::init_logging, ui::main_menu};

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    // The tool still works without logs, so a logger failure is only reported.
    let _logger = match init_logging("info", &config.log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            None
        }
    };

    main_menu(&config)?;
    Ok(())
}
