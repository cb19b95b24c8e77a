use anyhow::Result;
use log::{info, warn};

use crate::{cli::ExportArgs, store};

pub fn execute(args: &ExportArgs) -> Result<()> {
    let result = crate::load_result(&args.input)?;
    info!(
        "Processed {} row(s) into {} block(s) across {} district(s)",
        result.all_rows.len(),
        result.blocks.len(),
        result.districts.len()
    );

    // The in-memory result is already complete at this point; a failed write
    // only loses the cache, not the run.
    if let Err(err) = store::save(&result, &args.output) {
        warn!("Result computed but could not be saved for reuse");
        return Err(err);
    }
    info!("Cached result written to {:?}", args.output);
    Ok(())
}
