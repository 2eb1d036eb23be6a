//! Decoders for the positional column/data tables the ISS API returns.
//!
//! ISS responses carry tables as a `columns` name array plus a `data` array
//! of rows; a cell's meaning is positional. Decoding resolves the column
//! index by name first so reordered or trimmed responses still parse.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use vklad_core::{HistoricalSeries, PricePoint, Quote, VkladError};

const TRADEDATE_FORMAT: &str = "%Y-%m-%d";

/// Envelope of `history/.../securities/{SYM}.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryEnvelope {
    pub(crate) history: ColumnTable,
}

/// Envelope of `engines/.../securities/{SYM}.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct QuoteEnvelope {
    pub(crate) marketdata: ColumnTable,
}

/// One positional table from an ISS response.
#[derive(Debug, Deserialize)]
pub(crate) struct ColumnTable {
    pub(crate) columns: Vec<String>,
    pub(crate) data: Vec<Vec<Value>>,
}

impl ColumnTable {
    fn column_index(&self, name: &str) -> Result<usize, VkladError> {
        self.columns.iter().position(|c| c == name).ok_or_else(|| {
            VkladError::format(format!("response table is missing the {name} column"))
        })
    }
}

/// Decode a history table into a price series.
///
/// Rows with a null or non-numeric `CLOSE` cell (non-trading days) are
/// skipped; a row with a close but an unparseable `TRADEDATE` is a
/// `Format` error. An all-skipped table surfaces as `Data` through the
/// empty-series check.
pub(crate) fn decode_series(table: &ColumnTable) -> Result<HistoricalSeries, VkladError> {
    let date_idx = table.column_index("TRADEDATE")?;
    let close_idx = table.column_index("CLOSE")?;

    let mut points = Vec::with_capacity(table.data.len());
    for row in &table.data {
        let close = match row.get(close_idx).and_then(Value::as_f64) {
            Some(v) => v,
            None => continue,
        };

        let raw_date = row
            .get(date_idx)
            .and_then(Value::as_str)
            .ok_or_else(|| VkladError::format("TRADEDATE cell is not a string"))?;
        let date = NaiveDate::parse_from_str(raw_date, TRADEDATE_FORMAT).map_err(|err| {
            VkladError::format(format!("unparseable TRADEDATE {raw_date:?}: {err}"))
        })?;

        points.push(PricePoint { date, close });
    }

    HistoricalSeries::new(points)
}

/// Decode a marketdata table into a quote from its first row's `LAST` cell.
///
/// A missing row, a null cell, or a zero price all mean "no price
/// available" and map to `Data`.
pub(crate) fn decode_last_price(table: &ColumnTable) -> Result<Quote, VkladError> {
    let last_idx = table.column_index("LAST")?;
    let row = table
        .data
        .first()
        .ok_or_else(|| VkladError::data("marketdata table has no rows"))?;
    let last = row
        .get(last_idx)
        .and_then(Value::as_f64)
        .ok_or_else(|| VkladError::data("no last price available"))?;
    Quote::from_last(last)
}
