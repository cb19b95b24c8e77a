use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::{
    cli::{FinanceArgs, OutputFormat, SortKey},
    rollup::FinancialSummary,
    table::{self, Align},
    views::{self, BlockFilter},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FinanceLine<'a> {
    block_name: &'a str,
    #[serde(flatten)]
    financial: &'a FinancialSummary,
}

pub fn execute(args: &FinanceArgs) -> Result<()> {
    let result = crate::load_result(&args.input)?;
    let filter = BlockFilter {
        district: args.district.as_deref(),
        search: args.search.as_deref(),
        sort: SortKey::BlockName,
        limit: None,
    };
    let blocks = views::select_blocks(&result, &filter);
    let grand_total = views::finance_rollup(&blocks);

    match args.format {
        OutputFormat::Json => {
            let lines = blocks
                .iter()
                .map(|block| FinanceLine {
                    block_name: &block.block_name,
                    financial: &block.financial,
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
        OutputFormat::Table => {
            let headers = [
                "block",
                "pmksy_paid",
                "pmksy_cgst",
                "pmksy_sgst",
                "pmksy_tds",
                "bksy_paid",
                "bksy_cgst",
                "bksy_sgst",
                "bksy_tds",
                "gst_submitted",
                "invoices_due",
            ]
            .map(String::from)
            .to_vec();
            let mut rows = blocks
                .iter()
                .map(|block| finance_row(&block.block_name, &block.financial))
                .collect::<Vec<_>>();
            rows.push(finance_row("TOTAL", &grand_total));
            let mut aligns = vec![Align::Right; headers.len()];
            aligns[0] = Align::Left;
            table::print_table(&headers, &rows, &aligns);
        }
    }

    info!(
        "Reported finances for {} block(s); GST submitted {:.2}",
        blocks.len(),
        grand_total.gst_submitted
    );
    Ok(())
}

fn finance_row(name: &str, financial: &FinancialSummary) -> Vec<String> {
    vec![
        name.to_string(),
        format_amount(financial.pmksy.total_paid),
        format_amount(financial.pmksy.cgst),
        format_amount(financial.pmksy.sgst),
        format_amount(financial.pmksy.tds),
        format_amount(financial.bksy.total_paid),
        format_amount(financial.bksy.cgst),
        format_amount(financial.bksy.sgst),
        format_amount(financial.bksy.tds),
        format_amount(financial.gst_submitted),
        financial.invoices_due.to_string(),
    ]
}

pub(crate) fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
