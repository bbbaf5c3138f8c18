#![forbid(unsafe_code)]

use std::io::IsTerminal;
use std::process::ExitCode;

use stemgen::StemError;
use stemgen::cli::Cli;
use stemgen::config::{ColorOption, Config, OutputFormat};
use stemgen::engine::ExecutionEngine;
use stemgen::output::{HumanReporter, JsonlReporter, Reporter};
use termcolor::ColorChoice;
use tracing::Level;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<(), StemError> {
    let cwd = std::env::current_dir().map_err(StemError::WorkingDir)?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    let options = cli.options(&cwd, &config.scan.root);

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);
    let color = cli
        .color
        .map(ColorOption::from)
        .unwrap_or(config.output.color);

    let mut reporter: Box<dyn Reporter> = match format {
        OutputFormat::Human => Box::new(HumanReporter::stdout(color_choice(color))),
        OutputFormat::Jsonl => Box::new(JsonlReporter::stdout()),
    };

    let engine = ExecutionEngine::new(&config)?;
    engine.run(&options, reporter.as_mut())?;

    Ok(())
}

/// `auto` only colors when stdout is a terminal
fn color_choice(color: ColorOption) -> ColorChoice {
    match color {
        ColorOption::Auto if !std::io::stdout().is_terminal() => ColorChoice::Never,
        other => other.to_color_choice(),
    }
}
