use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::InvoicesArgs,
    finance::format_amount,
    io_utils,
    row::{Row, field},
    table::{self, Align},
    views,
};

const COLUMNS: &[&str] = &[
    field::REGISTRATION_NO,
    field::BENEFICIARY,
    field::BLOCK_NAME,
    field::DISTRICT_NAME,
    field::CURRENT_STATUS,
    field::GST_AMOUNT,
];

pub fn execute(args: &InvoicesArgs) -> Result<()> {
    let result = crate::load_result(&args.input)?;
    let due = views::invoice_due_rows(&result)
        .into_iter()
        .filter(|row| match args.district.as_deref() {
            Some(district) => row.get(field::DISTRICT_NAME) == district,
            None => true,
        })
        .collect::<Vec<_>>();

    let cells = due.iter().map(|row| listing_row(row)).collect::<Vec<_>>();

    if let Some(output) = &args.output {
        let mut writer = io_utils::open_csv_writer(Some(output.as_path()))?;
        writer
            .write_record(COLUMNS)
            .with_context(|| format!("Writing header to {output:?}"))?;
        for row in &cells {
            writer
                .write_record(row)
                .with_context(|| format!("Writing listing to {output:?}"))?;
        }
        writer
            .flush()
            .with_context(|| format!("Flushing listing to {output:?}"))?;
        info!("Wrote {} invoice(s) due to {:?}", cells.len(), output);
    } else {
        let headers = COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        let mut aligns = vec![Align::Left; headers.len()];
        aligns[headers.len() - 1] = Align::Right;
        table::print_table(&headers, &cells, &aligns);
        info!("Listed {} invoice(s) due", cells.len());
    }
    Ok(())
}

/// One listing line; the GST cell is the row's total GST (base + additional
/// item), matching what the rollup counts as submitted.
fn listing_row(row: &Row) -> Vec<String> {
    let gst = row.number(field::GST_AMOUNT) + row.number(field::GST_AMOUNT_ADDL);
    vec![
        row.get(field::REGISTRATION_NO).to_string(),
        row.get(field::BENEFICIARY).to_string(),
        row.get(field::BLOCK_NAME).to_string(),
        row.get(field::DISTRICT_NAME).to_string(),
        row.get(field::CURRENT_STATUS).to_string(),
        format_amount(gst),
    ]
}
