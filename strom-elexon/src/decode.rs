//! Decoding of BMRS settlement CSVs.
//!
//! Reports ship four metadata lines ahead of the header row and close with
//! an end-of-file marker record; both wrappers are stripped here.

use csv::StringRecord;

use strom_types::StromError;

const CONNECTOR: &str = "strom-elexon";
const PREAMBLE_LINES: usize = 4;

/// Header plus data rows of one settlement report.
#[derive(Debug)]
pub struct SettlementRows {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl SettlementRows {
    /// Parse the raw CSV body of a settlement report.
    ///
    /// # Errors
    /// `SourceUnavailable` when the body is too short or not valid CSV.
    pub fn parse(body: &str) -> Result<Self, StromError> {
        let mut lines = body.lines();
        for _ in 0..PREAMBLE_LINES {
            if lines.next().is_none() {
                return Err(StromError::source(
                    CONNECTOR,
                    "settlement report shorter than its preamble",
                ));
            }
        }
        let data: String = lines.collect::<Vec<_>>().join("\n");
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| StromError::source(CONNECTOR, format!("malformed csv header: {e}")))?
            .clone();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| StromError::source(CONNECTOR, format!("malformed csv: {e}")))?;
            rows.push(record);
        }
        // Last record is the end-of-file marker.
        rows.pop();
        Ok(Self { headers, rows })
    }

    /// Index of a named column.
    ///
    /// # Errors
    /// `SourceUnavailable` when the column is absent.
    pub fn column(&self, name: &str) -> Result<usize, StromError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                StromError::source(CONNECTOR, format!("settlement report lacks column '{name}'"))
            })
    }

    /// Data rows, preamble and footer stripped.
    #[must_use]
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }
}

/// Parse one numeric cell, tagged with its column for diagnostics.
///
/// # Errors
/// `MalformedBatch` when the cell does not parse.
pub fn numeric_cell(record: &StringRecord, idx: usize, column: &str) -> Result<f64, StromError> {
    let raw = record.get(idx).unwrap_or_default();
    raw.trim()
        .parse::<f64>()
        .map_err(|_| StromError::malformed(CONNECTOR, format!("{column} value '{raw}'")))
}

/// Parse one settlement-period cell (1-based).
///
/// # Errors
/// `MalformedBatch` when the cell is not a positive integer.
pub fn period_cell(record: &StringRecord, idx: usize) -> Result<u32, StromError> {
    let raw = record.get(idx).unwrap_or_default();
    let period = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| StromError::malformed(CONNECTOR, format!("settlement period '{raw}'")))?;
    if period == 0 {
        return Err(StromError::malformed(
            CONNECTOR,
            "settlement period 0 (periods are 1-based)",
        ));
    }
    Ok(period)
}
