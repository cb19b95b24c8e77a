pub mod cli;
pub mod districts;
pub mod export;
pub mod finance;
pub mod invoices;
pub mod io_utils;
pub mod row;
pub mod rollup;
pub mod source;
pub mod stage;
pub mod store;
pub mod summary;
pub mod table;
pub mod views;

use std::{env, sync::OnceLock};

use anyhow::{Result, bail};
use clap::Parser;
use log::{LevelFilter, info};

use crate::{
    cli::{Cli, Commands, InputArgs},
    rollup::AggregationResult,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("scheme_rollup", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Summary(args) => summary::execute(&args),
        Commands::Finance(args) => finance::execute(&args),
        Commands::Invoices(args) => invoices::execute(&args),
        Commands::Districts(args) => districts::execute(&args),
        Commands::Export(args) => export::execute(&args),
    }
}

/// Resolves the shared input flags into an [`AggregationResult`]: either a
/// verbatim cache reload or a fresh read-and-aggregate. An empty dataset is
/// rejected here, on the caller side — the aggregator itself is total.
pub(crate) fn load_result(args: &InputArgs) -> Result<AggregationResult> {
    if let Some(cache) = &args.cache {
        info!("Loading cached result from {:?}", cache);
        return store::load(cache);
    }
    let Some(input) = &args.input else {
        bail!("Provide --input (or --cache) to read data from");
    };
    let delimiter = io_utils::resolve_input_delimiter(input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let limit = (args.limit > 0).then_some(args.limit);
    let rows = source::read_rows(input, delimiter, encoding, limit)?;
    if rows.is_empty() {
        bail!("No data found in {}", input.display());
    }
    Ok(rollup::aggregate(rows))
}
