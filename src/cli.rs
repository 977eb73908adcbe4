use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(name = "precision", long = "precision", short = 'p', global = true)]
    pub precision: Option<usize>,

    /// Log parse and overflow details to stderr, overriding RUST_LOG
    #[arg(name = "verbose", long = "verbose", short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a data size such as "1536", "12 MiB" or "100kb"
    Size(QuantityArgs),
    /// Parse a data-transfer speed such as "2MB/s" or "100 Mbps"
    Speed(QuantityArgs),
    /// Convert a temperature between kelvin, celsius and fahrenheit
    Temp(TemperatureArgs),
}

#[derive(Debug, clap::Args)]
pub struct QuantityArgs {
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    #[arg(name = "si", long = "si", alias = "metric", conflicts_with_all = ["unit", "raw", "all"])]
    pub si: bool,
    #[arg(name = "bits", long = "bits", conflicts_with_all = ["unit", "raw", "all"])]
    pub bits: bool,

    #[arg(name = "unit", long = "unit", short = 'u', conflicts_with_all = ["raw", "all"])]
    pub unit: Option<String>,
    #[arg(name = "raw", long = "raw", short = 'r', conflicts_with = "all")]
    pub raw: bool,
    #[arg(name = "all", long = "all", short = 'a')]
    pub all: bool,
}

#[derive(Debug, clap::Args)]
pub struct TemperatureArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: f64,

    #[arg(name = "from", long = "from", short = 'f', default_value = "c")]
    pub from: String,
    #[arg(name = "to", long = "to", short = 't')]
    pub to: Option<String>,
}
