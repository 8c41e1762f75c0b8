use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_processor::application::batch::process_all;
use payment_processor::application::processor::PaymentProcessor;
use payment_processor::config::GatewayConfig;
use payment_processor::interfaces::csv::outcome_writer::OutcomeWriter;
use payment_processor::interfaces::csv::request_reader::RequestReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file (user_id, amount, currency)
    input: PathBuf,

    #[command(flatten)]
    gateway: GatewayConfig,

    /// Log filter directives, e.g. `info` or `payment_processor=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the outcome CSV.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).into_diagnostic()?)
        .with_writer(io::stderr)
        .init();

    let processor = PaymentProcessor::new(cli.gateway.build_gateway());

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let outcomes = process_all(&processor, reader.requests()).await;

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    writer.write_outcomes(&outcomes).into_diagnostic()?;

    Ok(())
}
