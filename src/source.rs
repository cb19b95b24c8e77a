//! Row source: decodes a CSV registration export into [`Row`] values.
//!
//! Header whitespace is trimmed before rows are keyed, matching what the
//! upstream export tools emit. A file missing some of the known columns
//! still loads — the affected fields simply degrade to their defaults — but
//! the gap is logged once so a renamed header doesn't silently zero a report.

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::{debug, warn};

use crate::{
    io_utils,
    row::{Row, field},
};

pub fn read_rows(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
    limit: Option<usize>,
) -> Result<Vec<Row>> {
    debug!(
        "Reading '{}' with delimiter '{}'",
        path.display(),
        io_utils::printable_delimiter(delimiter)
    );
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let headers: Vec<String> = io_utils::reader_headers(&mut reader, encoding)?
        .into_iter()
        .map(|header| header.trim().to_string())
        .collect();
    warn_on_missing_fields(&headers);

    let mut rows = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        if let Some(limit) = limit
            && rows.len() >= limit
        {
            break;
        }
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)?;
        rows.push(Row::from_headers(&headers, decoded));
    }
    debug!("Read {} row(s) from '{}'", rows.len(), path.display());
    Ok(rows)
}

fn warn_on_missing_fields(headers: &[String]) {
    let missing = field::CORE_FIELDS
        .iter()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .copied()
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        warn!(
            "Input is missing {} known column(s): {}",
            missing.len(),
            missing.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn reads_rows_with_trimmed_headers() {
        let file = write_csv(" Block Name ,District Name\nAlpha,X\nBeta,Y\n");
        let rows = read_rows(file.path(), b',', UTF_8, None).expect("read rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(field::BLOCK_NAME), "Alpha");
        assert_eq!(rows[1].get(field::DISTRICT_NAME), "Y");
    }

    #[test]
    fn short_records_leave_fields_absent() {
        let file = write_csv("Block Name,District Name,GST Amount\nAlpha\n");
        let rows = read_rows(file.path(), b',', UTF_8, None).expect("read rows");
        assert_eq!(rows[0].get(field::BLOCK_NAME), "Alpha");
        assert_eq!(rows[0].get(field::DISTRICT_NAME), "");
        assert_eq!(rows[0].number(field::GST_AMOUNT), 0.0);
    }

    #[test]
    fn limit_caps_row_count() {
        let file = write_csv("Block Name\nA\nB\nC\n");
        let rows = read_rows(file.path(), b',', UTF_8, Some(2)).expect("read rows");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn missing_file_is_a_contextual_error() {
        let err = read_rows(Path::new("/nonexistent/export.csv"), b',', UTF_8, None)
            .expect_err("should fail");
        assert!(err.to_string().contains("Opening input file"));
    }
}
