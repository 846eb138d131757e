//! CLI: читает файл поручений и печатает ежедневные отчёты по датам расчётов.

use std::path::PathBuf;

use clap::Parser;
use trade_settlement_report::{
    BusinessCalendar, DEFAULT_DATE_FORMAT, InstructionReader, ReportAggregator,
    SettlementResolver, log_filter, render,
};

#[derive(Parser)]
#[command(name = "trade-settlement-report")]
#[command(about = "Daily incoming/outgoing settlement reports from a batch of trade instructions")]
struct Cli {
    /// Path to the instruction file
    path: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Treat the first line as a header row
    #[arg(long)]
    has_headers: bool,

    /// Date format of the instruction and settlement date columns
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Additional currency settled on the Sunday-Thursday calendar (repeatable)
    #[arg(long = "gulf-currency", value_name = "CODE")]
    gulf_currencies: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let delimiter = u8::try_from(cli.delimiter)
        .map_err(|_| format!("delimiter must be a single-byte character: {:?}", cli.delimiter))?;

    let mut instructions = InstructionReader::from_path(&cli.path)?
        .delimiter(delimiter)
        .has_headers(cli.has_headers)
        .date_format(cli.date_format)
        .read()?;

    let resolver = cli
        .gulf_currencies
        .iter()
        .fold(SettlementResolver::new(), |resolver, currency| {
            resolver.with_calendar(currency, BusinessCalendar::Gulf)
        });
    let reports = ReportAggregator::new(resolver).aggregate(&mut instructions);

    print!("{}", render(&reports));
    Ok(())
}
