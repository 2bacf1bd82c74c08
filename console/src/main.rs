use std::error::Error;
use std::path::Path;

use configuration::ConsoleConfiguration;
use log::{debug, info};

mod cli_args;
mod commands;
mod interactive;
mod render;

use cli_args::{CliArgs, Command};
use render::Printer;

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::try_init();

    let args: CliArgs = argh::from_env();
    let config = load_config(&args.config)?;
    let printer = Printer::new(config.display.color);

    debug!("command: {:?}", args.command);

    match args.command {
        None => interactive::run(&printer, &config)?,
        Some(Command::Test(_)) => {
            if commands::test(&printer) > 0 {
                std::process::exit(1);
            }
        }
        Some(Command::Bench(bench_args)) => {
            let iterations = bench_args.iterations.unwrap_or(config.bench.iterations);
            commands::bench(&printer, iterations);
        }
        Some(Command::Parse(parse_args)) => commands::parse(&printer, &parse_args.hex.join(" ")),
        Some(Command::Sample(_)) => commands::sample(&printer),
        Some(Command::Response(_)) => commands::response(&printer),
        Some(Command::Query(query_args)) => commands::query(&printer, query_args.id, &query_args.domain),
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<ConsoleConfiguration, config::ConfigError> {
    if !path.exists() {
        info!("no config file at {}, using defaults", path.display());
        return Ok(ConsoleConfiguration::default());
    }

    info!("loading config from {}", path.display());
    configuration::get_config(path.to_path_buf())
}
