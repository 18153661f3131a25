use crate::core::columns::resolve_columns;
use crate::domain::model::{ColumnIndexMap, GiveawayRecord, LogicalField, TransformResult, PLACEHOLDER};
use crate::utils::error::{EtlError, Result};

/// Splits CSV text into the header row and the data rows.
///
/// Rows may have any length; quoting follows RFC 4180 so quoted commas and
/// newlines stay inside their cell.
///
/// The first line is always the header row. A blank first line yields an
/// empty header, since the reader itself would skip it.
pub fn parse_sheet(csv_text: &str) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let first_line = csv_text.lines().next().ok_or(EtlError::MissingHeaderError)?;
    if first_line.trim_end_matches('\r').is_empty() {
        let rest = csv_text.split_once('\n').map_or("", |(_, rest)| rest);
        return Ok((Vec::new(), read_rows(rest)?));
    }

    let mut rows = read_rows(csv_text)?.into_iter();
    let headers = rows.next().ok_or(EtlError::MissingHeaderError)?;
    Ok((headers, rows.collect()))
}

fn read_rows(csv_text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let rows = reader
        .records()
        .map(|r| r.map(|rec| rec.iter().map(str::to_string).collect::<Vec<_>>()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn cell<'a>(row: &'a [String], index: Option<usize>) -> Option<&'a str> {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Projects data rows into records.
///
/// Rows without both a winner and a giveaway are dropped. Any other missing
/// value becomes [`PLACEHOLDER`].
pub fn extract_records<R: AsRef<[String]>>(columns: &ColumnIndexMap, rows: &[R]) -> Vec<GiveawayRecord> {
    let mut records = Vec::new();

    for row in rows {
        let row = row.as_ref();
        if row.iter().all(String::is_empty) {
            continue;
        }

        let winner = cell(row, columns.get(LogicalField::Winner));
        let giveaway = cell(row, columns.get(LogicalField::Giveaway));
        if winner.is_none() || giveaway.is_none() {
            tracing::trace!("Skipping row without winner or giveaway: {:?}", row);
            continue;
        }

        records.push(GiveawayRecord::from_fields(|field| {
            cell(row, columns.get(field)).unwrap_or(PLACEHOLDER).to_string()
        }));
    }

    records
}

/// Full transform step: parse, resolve columns, extract records.
pub fn transform_sheet(csv_text: &str) -> Result<TransformResult> {
    let (headers, rows) = parse_sheet(csv_text)?;
    tracing::debug!("Parsed {} headers and {} data rows", headers.len(), rows.len());

    let columns = resolve_columns(&headers);
    let records = extract_records(&columns, &rows);
    tracing::debug!("{} of {} rows kept", records.len(), rows.len());

    Ok(TransformResult { columns, records })
}
