//! Row model for registration exports.
//!
//! A [`Row`] is one record from a spreadsheet export: a mapping from
//! human-readable column header to raw string value. Rows are immutable and
//! cheap to clone (shared ownership), so grouping a row into a block summary
//! never copies its field data.
//!
//! The accessor methods centralize the missing-value policy: absent, empty,
//! or unparseable fields degrade to `""` / `0.0` rather than erroring.
//! Real-world exports leave financial cells blank until the relevant workflow
//! step is reached, and treating those as zero keeps block sums well-defined.

use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

/// Column headers used by the rollup, exactly as they appear in the export.
/// Matching is exact-string, punctuation included ("Tax Inv. No.").
pub mod field {
    pub const BLOCK_NAME: &str = "Block Name";
    pub const DISTRICT_NAME: &str = "District Name";
    pub const CURRENT_STATUS: &str = "Current Status";
    pub const INSTALLATION_DATE: &str = "Installation Date";
    pub const INSPECTION_DATE: &str = "Inspection Date";
    pub const WORK_ORDER_DATE: &str = "Work Order Date";
    pub const JOINT_INSPECTION_DATE: &str = "Joint Insp. Date";
    pub const TAX_INVOICE_NO: &str = "Tax Inv. No.";
    pub const GST_AMOUNT: &str = "GST Amount";
    pub const GST_AMOUNT_ADDL: &str = "GST Amount (Addl. Item)";
    pub const PMKSY_AMOUNT_PAID: &str = "PMKSY Amount Paid";
    pub const PMKSY_CGST: &str = "PMKSY CGST";
    pub const PMKSY_SGST: &str = "PMKSY SGST";
    pub const PMKSY_TDS: &str = "PMKSY TDS";
    pub const BKSY_AMOUNT_PAID: &str = "BKSY Amount Paid";
    pub const BKSY_CGST: &str = "BKSY CGST";
    pub const BKSY_SGST: &str = "BKSY SGST";
    pub const BKSY_TDS: &str = "BKSY TDS";

    // Display-only columns carried through from the export when present.
    pub const REGISTRATION_NO: &str = "Farmer Registration Number";
    pub const BENEFICIARY: &str = "Name of Beneficiary";

    /// Headers the aggregation reads. A source missing one of these still
    /// loads; the affected fields degrade to their defaults.
    pub const CORE_FIELDS: &[&str] = &[
        BLOCK_NAME,
        DISTRICT_NAME,
        CURRENT_STATUS,
        INSTALLATION_DATE,
        INSPECTION_DATE,
        WORK_ORDER_DATE,
        JOINT_INSPECTION_DATE,
        TAX_INVOICE_NO,
        GST_AMOUNT,
        GST_AMOUNT_ADDL,
        PMKSY_AMOUNT_PAID,
        PMKSY_CGST,
        PMKSY_SGST,
        PMKSY_TDS,
        BKSY_AMOUNT_PAID,
        BKSY_CGST,
        BKSY_SGST,
        BKSY_TDS,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Arc<BTreeMap<String, String>>,
}

impl Row {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }

    /// Builds a row by zipping decoded header and value cells. Values beyond
    /// the header width are dropped; short records leave fields absent.
    pub fn from_headers(headers: &[String], values: Vec<String>) -> Self {
        let fields = headers
            .iter()
            .zip(values)
            .map(|(header, value)| (header.clone(), value))
            .collect();
        Self::new(fields)
    }

    /// Raw field value, `""` when absent.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Numeric field value; missing, empty, or non-numeric text is `0.0`.
    pub fn number(&self, field: &str) -> f64 {
        self.get(field).trim().parse().unwrap_or(0.0)
    }

    /// Whether the field holds a non-blank value.
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).trim().is_empty()
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_defaults_to_empty_for_missing_field() {
        let row = row(&[(field::BLOCK_NAME, "Alpha")]);
        assert_eq!(row.get(field::BLOCK_NAME), "Alpha");
        assert_eq!(row.get(field::DISTRICT_NAME), "");
    }

    #[test]
    fn number_coerces_bad_input_to_zero() {
        let row = row(&[
            (field::PMKSY_AMOUNT_PAID, "500.25"),
            (field::PMKSY_CGST, "abc"),
            (field::PMKSY_SGST, ""),
            (field::PMKSY_TDS, "  42 "),
        ]);
        assert_eq!(row.number(field::PMKSY_AMOUNT_PAID), 500.25);
        assert_eq!(row.number(field::PMKSY_CGST), 0.0);
        assert_eq!(row.number(field::PMKSY_SGST), 0.0);
        assert_eq!(row.number(field::PMKSY_TDS), 42.0);
        assert_eq!(row.number(field::BKSY_TDS), 0.0);
    }

    #[test]
    fn has_treats_whitespace_as_blank() {
        let row = row(&[(field::TAX_INVOICE_NO, "   "), (field::WORK_ORDER_DATE, "2024-02-01")]);
        assert!(!row.has(field::TAX_INVOICE_NO));
        assert!(row.has(field::WORK_ORDER_DATE));
        assert!(!row.has(field::INSTALLATION_DATE));
    }

    #[test]
    fn from_headers_drops_extra_values() {
        let headers = vec!["Block Name".to_string(), "District Name".to_string()];
        let row = Row::from_headers(&headers, vec![
            "Alpha".to_string(),
            "X".to_string(),
            "orphan".to_string(),
        ]);
        assert_eq!(row.get(field::BLOCK_NAME), "Alpha");
        assert_eq!(row.get(field::DISTRICT_NAME), "X");
    }

    #[test]
    fn serializes_as_plain_object() {
        let row = row(&[(field::BLOCK_NAME, "Alpha")]);
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"Block Name":"Alpha"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }
}
