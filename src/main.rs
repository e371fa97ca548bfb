use clap::Parser;
use clobbermind::prelude::*;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = DriverOptions::parse();

    // Set the logger to write-and-flush so that round diagnostics never shear the board output.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::WithThread)
        .start()?;

    print_header();

    if options.interactive
    {
        Console::new(&options).run()?;
        return Ok(());
    }

    // Configuration errors surface here, before any game state exists.
    let mut arena = match Arena::new(&options)
    {
        | Ok(arena) => arena,
        | Err(err) if err.usage() =>
        {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        | Err(err) => return Err(err),
    };

    arena.run()?;

    Ok(())
}

fn print_header()
{
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    log::debug!("clobbering time.");
}
