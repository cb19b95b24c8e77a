//! Block-wise rollup of registration rows.
//!
//! [`aggregate`] is a single forward pass over the input: each row is
//! classified into a stage, its financial fields are extracted, and the
//! results are grouped by "Block Name". The function is pure and total —
//! malformed row content degrades to zero/empty defaults and never errors.
//! Whether an empty dataset is worth reporting on is the caller's judgment;
//! an empty input simply yields the empty result.
//!
//! The whole result tree serializes to plain JSON (camelCase keys) and
//! round-trips verbatim, which is what the cache sink in [`crate::store`]
//! relies on.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    row::{Row, field},
    stage::Stage,
};

/// Per-stage row counts for one block. `total` always equals the sum of the
/// five stage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub total: u64,
    pub new_registration: u64,
    pub joint_inspection: u64,
    pub work_order: u64,
    pub install: u64,
    pub install_and_inspection: u64,
}

impl StageCounts {
    fn record(&mut self, stage: Stage) {
        self.total += 1;
        match stage {
            Stage::NewRegistration => self.new_registration += 1,
            Stage::JointInspection => self.joint_inspection += 1,
            Stage::WorkOrder => self.work_order += 1,
            Stage::Install => self.install += 1,
            Stage::InstallAndInspection => self.install_and_inspection += 1,
        }
    }

    pub fn count(&self, stage: Stage) -> u64 {
        match stage {
            Stage::NewRegistration => self.new_registration,
            Stage::JointInspection => self.joint_inspection,
            Stage::WorkOrder => self.work_order,
            Stage::Install => self.install,
            Stage::InstallAndInspection => self.install_and_inspection,
        }
    }
}

/// Accumulated payment and tax totals for one subsidy scheme within a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeTotals {
    pub total_paid: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub tds: f64,
}

struct SchemeFields {
    amount_paid: &'static str,
    cgst: &'static str,
    sgst: &'static str,
    tds: &'static str,
}

const PMKSY_FIELDS: SchemeFields = SchemeFields {
    amount_paid: field::PMKSY_AMOUNT_PAID,
    cgst: field::PMKSY_CGST,
    sgst: field::PMKSY_SGST,
    tds: field::PMKSY_TDS,
};

const BKSY_FIELDS: SchemeFields = SchemeFields {
    amount_paid: field::BKSY_AMOUNT_PAID,
    cgst: field::BKSY_CGST,
    sgst: field::BKSY_SGST,
    tds: field::BKSY_TDS,
};

impl SchemeTotals {
    fn ingest(&mut self, row: &Row, fields: &SchemeFields) {
        self.total_paid += row.number(fields.amount_paid);
        self.cgst += row.number(fields.cgst);
        self.sgst += row.number(fields.sgst);
        self.tds += row.number(fields.tds);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub pmksy: SchemeTotals,
    pub bksy: SchemeTotals,
    pub gst_submitted: f64,
    pub invoices_due: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub block_name: String,
    pub registration_stages: StageCounts,
    pub financial: FinancialSummary,
    /// Rows belonging to this block, in input order. Rows are shared with
    /// `all_rows`, not copied.
    pub rows: Vec<Row>,
}

impl BlockSummary {
    fn empty(block_name: &str) -> Self {
        Self {
            block_name: block_name.to_string(),
            registration_stages: StageCounts::default(),
            financial: FinancialSummary::default(),
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub blocks: BTreeMap<String, BlockSummary>,
    /// The full input, unmodified, in input order.
    pub all_rows: Vec<Row>,
    /// Distinct non-blank "District Name" values.
    pub districts: Vec<String>,
    /// Grand total of `gst_submitted` across all blocks.
    pub gst_submitted_total: f64,
}

/// Rolls up an export into block summaries in one pass.
///
/// Rows with a blank "Block Name" are excluded from `blocks` but still
/// contribute their district and remain in `all_rows`. GST and invoice-due
/// tracking apply only to rows at or beyond the work-order stage; scheme
/// totals accumulate for every row of the block regardless of stage.
pub fn aggregate(rows: Vec<Row>) -> AggregationResult {
    let mut blocks: BTreeMap<String, BlockSummary> = BTreeMap::new();
    let mut districts: BTreeSet<String> = BTreeSet::new();
    let mut gst_submitted_total = 0.0;

    for row in &rows {
        if row.has(field::DISTRICT_NAME) {
            districts.insert(row.get(field::DISTRICT_NAME).to_string());
        }

        if !row.has(field::BLOCK_NAME) {
            continue;
        }
        let block_name = row.get(field::BLOCK_NAME);
        let block = blocks
            .entry(block_name.to_string())
            .or_insert_with(|| BlockSummary::empty(block_name));

        block.rows.push(row.clone());
        let stage = Stage::classify(row);
        block.registration_stages.record(stage);

        block.financial.pmksy.ingest(row, &PMKSY_FIELDS);
        block.financial.bksy.ingest(row, &BKSY_FIELDS);

        if stage.gst_eligible() {
            let gst = row.number(field::GST_AMOUNT) + row.number(field::GST_AMOUNT_ADDL);
            block.financial.gst_submitted += gst;
            gst_submitted_total += gst;
            if !row.has(field::TAX_INVOICE_NO) {
                block.financial.invoices_due += 1;
            }
        }
    }

    AggregationResult {
        blocks,
        all_rows: rows,
        districts: districts.into_iter().collect(),
        gst_submitted_total,
    }
}
