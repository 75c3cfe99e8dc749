use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use bench_config::BenchConfig;
use bench_logging::{LoggingConfig, init_logging};
use clap::Parser;
use link_bench::{BenchmarkConfig, BenchmarkOrchestrator, CancellationSignal, NeverCancel};
use tracing::info;

mod backends;
mod cli;
mod output;
mod terminal;

use crate::cli::LinkBenchCommand;
use crate::output::{ConsoleProgress, ReportOutput};
use crate::terminal::{KeypressCancellation, RawModeGuard};

fn main() -> Result<()> {
    let command = LinkBenchCommand::parse();

    if command.list_backends {
        for (name, description) in backends::BACKENDS {
            println!("{name:<12} {description}");
        }
        return Ok(());
    }

    let bench_config = BenchConfig::new();
    init_logging(LoggingConfig::from_config(env!("CARGO_PKG_VERSION").to_owned(), &bench_config.log));

    let mut config = BenchmarkConfig::from(&bench_config);
    command.apply_to(&mut config);
    config.validate().context("Invalid benchmark configuration")?;

    let mut backend = backends::create_backend(&command.backend, &command.backend_options())?;
    info!(backend = backend.label(), device = %backend.device_description(), "Selected backend");

    let interactive = !command.no_interactive && io::stdin().is_terminal();
    let raw_mode = if interactive {
        Some(RawModeGuard::acquire().context("Failed to put the terminal into raw mode")?)
    } else {
        None
    };
    let raw_terminal = raw_mode.is_some();

    let progress = ConsoleProgress::new(!command.json && io::stderr().is_terminal(), raw_terminal);
    let output = ReportOutput::new(command.json, raw_terminal);
    let mut cancel: Box<dyn CancellationSignal> = if interactive {
        eprint!("Benchmarking {}. Press q or Esc to stop.\r\n", backend.device_description());
        Box::new(KeypressCancellation::new())
    } else {
        Box::new(NeverCancel)
    };

    let mut orchestrator = BenchmarkOrchestrator::new(config, backend.as_mut(), &progress)?;
    if let Some(path) = orchestrator.result_logger().path() {
        info!("Appending results to {path:?}");
    }

    let state = orchestrator.run(cancel.as_mut(), |report| output.emit(report))?;
    info!(?state, runs = orchestrator.run_count(), "Benchmark finished");

    Ok(())
}
