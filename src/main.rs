// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> LoaderCore --> preload --> Shell::run
//! ```

use std::process::ExitCode;

use modlibrary::Invocation;
use modloader::cli::{self, Cli};
use modloader::error::Result;
use modloader::loader::{DylibOpener, LoaderCore};
use modloader::logging::init_logging;
use modloader::shell::{Shell, spawn_line_reader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let loader = cli.config_loader()?;

    if cli.show_config {
        let files = loader.format_loaded_files();
        let config = loader.build()?;
        for line in config.format_options() {
            println!("{line}");
        }
        println!();
        for line in files {
            println!("{line}");
        }
        return Ok(());
    }

    let config = loader.build()?;
    let core = LoaderCore::new(&config.plugins_home, Box::new(DylibOpener))?;
    let mut shell = Shell::new(core, std::io::stdout(), &config.shell);

    for module in &cli.preload {
        shell.execute_invocation(&Invocation::with_args("modprobe", [module.as_str()]))?;
    }

    let input = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))?;
    shell.run(input, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
