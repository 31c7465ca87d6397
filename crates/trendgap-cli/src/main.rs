use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod analyze_cmd;
mod cli;
mod error;
mod page;
mod serve_cmd;
mod shared;

use analyze_cmd::run_analyze;
use cli::{Cli, Commands};
use error::{EXIT_RUNTIME_ERROR, output_format_hint, parse_output_format, render_error};
use serve_cmd::run_serve;

fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose { "debug" } else { default_level };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            init_logging(cli.verbose, "warn");
            debug!("Parsed CLI args: {:?}", args);

            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_analyze(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Serve(args) => {
            init_logging(cli.verbose, "info");
            debug!("Parsed CLI args: {:?}", args);

            match run_serve(args) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    ExitCode::from(EXIT_RUNTIME_ERROR)
                }
            }
        }
    }
}
