use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about = "Roll up registration exports into block-wise summaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print per-block registration-stage counts and completion
    Summary(SummaryArgs),
    /// Print per-block PMKSY/BKSY financial totals, GST, and invoices due
    Finance(FinanceArgs),
    /// List GST-eligible registrations with no tax invoice recorded
    Invoices(InvoicesArgs),
    /// List distinct districts with their block and registration counts
    Districts(DistrictsArgs),
    /// Aggregate an export and save the result as a JSON cache file
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input CSV export ('-' reads from stdin)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,
    /// Previously exported JSON result to load instead of re-aggregating
    #[arg(long = "cache", conflicts_with = "input")]
    pub cache: Option<PathBuf>,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Maximum rows to read (0 = all)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Keep only blocks with registrations from this district
    #[arg(short = 'd', long)]
    pub district: Option<String>,
    /// Case-insensitive block-name search term
    #[arg(short = 's', long)]
    pub search: Option<String>,
    /// Sort order for the block table
    #[arg(long, value_enum, default_value = "block-name")]
    pub sort: SortKey,
    /// Maximum blocks to display (0 = all)
    #[arg(long = "top", default_value_t = 0)]
    pub top: usize,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct FinanceArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Keep only blocks with registrations from this district
    #[arg(short = 'd', long)]
    pub district: Option<String>,
    /// Case-insensitive block-name search term
    #[arg(short = 's', long)]
    pub search: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct InvoicesArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Keep only registrations from this district
    #[arg(short = 'd', long)]
    pub district: Option<String>,
    /// Write the listing as CSV to this file instead of printing a table
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DistrictsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Destination JSON cache file
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortKey {
    BlockName,
    Total,
    Completion,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::BlockName
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
