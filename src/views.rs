//! Read-only views over an [`AggregationResult`].
//!
//! Selection, sorting, and derived completion metrics live here, outside the
//! single-pass reducer in [`crate::rollup`]: they add no aggregation
//! semantics, only presentation-side computation on the finished result.

use itertools::Itertools;

use crate::{
    cli::SortKey,
    row::{Row, field},
    rollup::{AggregationResult, BlockSummary, FinancialSummary, StageCounts},
    stage::Stage,
};

/// Share of a block's registrations that completed install and inspection,
/// as a percentage.
pub fn completion_rate(counts: &StageCounts) -> f64 {
    if counts.total == 0 {
        return 0.0;
    }
    counts.install_and_inspection as f64 / counts.total as f64 * 100.0
}

/// Weighted progression score in `0.0..=1.0`. Later stages weigh more:
/// joint inspection 0.25, work order 0.5, install 0.75, install & inspection
/// 1.0. New registrations contribute nothing.
pub fn completion_score(counts: &StageCounts) -> f64 {
    if counts.total == 0 {
        return 0.0;
    }
    let weighted = counts.joint_inspection as f64 * 0.25
        + counts.work_order as f64 * 0.5
        + counts.install as f64 * 0.75
        + counts.install_and_inspection as f64;
    weighted / counts.total as f64
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFilter<'a> {
    /// Keep only blocks with at least one row from this district.
    pub district: Option<&'a str>,
    /// Case-insensitive substring match on the block name.
    pub search: Option<&'a str>,
    pub sort: SortKey,
    pub limit: Option<usize>,
}

/// Filters and orders block summaries for display. The numeric sort keys
/// (total, completion) are descending; block name is ascending.
pub fn select_blocks<'a>(
    result: &'a AggregationResult,
    filter: &BlockFilter<'_>,
) -> Vec<&'a BlockSummary> {
    let selected = result
        .blocks
        .values()
        .filter(|block| match filter.district {
            Some(district) => block
                .rows
                .iter()
                .any(|row| row.get(field::DISTRICT_NAME) == district),
            None => true,
        })
        .filter(|block| match filter.search {
            Some(term) => block
                .block_name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        })
        .sorted_by(|a, b| match filter.sort {
            SortKey::BlockName => a.block_name.cmp(&b.block_name),
            SortKey::Total => b
                .registration_stages
                .total
                .cmp(&a.registration_stages.total)
                .then_with(|| a.block_name.cmp(&b.block_name)),
            SortKey::Completion => completion_score(&b.registration_stages)
                .total_cmp(&completion_score(&a.registration_stages))
                .then_with(|| a.block_name.cmp(&b.block_name)),
        });
    match filter.limit {
        Some(limit) if limit > 0 => selected.take(limit).collect(),
        _ => selected.collect(),
    }
}

/// Grand financial totals across the selected blocks.
pub fn finance_rollup(blocks: &[&BlockSummary]) -> FinancialSummary {
    let mut rollup = FinancialSummary::default();
    for block in blocks {
        rollup.pmksy.total_paid += block.financial.pmksy.total_paid;
        rollup.pmksy.cgst += block.financial.pmksy.cgst;
        rollup.pmksy.sgst += block.financial.pmksy.sgst;
        rollup.pmksy.tds += block.financial.pmksy.tds;
        rollup.bksy.total_paid += block.financial.bksy.total_paid;
        rollup.bksy.cgst += block.financial.bksy.cgst;
        rollup.bksy.sgst += block.financial.bksy.sgst;
        rollup.bksy.tds += block.financial.bksy.tds;
        rollup.gst_submitted += block.financial.gst_submitted;
        rollup.invoices_due += block.financial.invoices_due;
    }
    rollup
}

/// Rows with a pending tax invoice: blocked, GST-eligible, and lacking a
/// "Tax Inv. No." value. Input order is preserved, and the length always
/// matches the sum of `invoices_due` across blocks.
pub fn invoice_due_rows(result: &AggregationResult) -> Vec<&Row> {
    result
        .all_rows
        .iter()
        .filter(|row| row.has(field::BLOCK_NAME))
        .filter(|row| Stage::classify(row).gst_eligible())
        .filter(|row| !row.has(field::TAX_INVOICE_NO))
        .collect()
}
