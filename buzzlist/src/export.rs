//! CSV export of a watchlist.
//!
//! The file has one header row, `Company,Ticker Symbol`, followed by one row
//! per entry in watchlist order. [`csv_data_uri`] wraps it in a base64 data
//! URI suitable for a download link.

use base64::prelude::{BASE64_STANDARD, Engine};
use buzzlist_core::{BuzzError, Watchlist};

/// Suggested file name for the downloaded CSV.
pub const CSV_FILENAME: &str = "stock_tickers.csv";

/// Column headers, in order.
pub const CSV_HEADER: [&str; 2] = ["Company", "Ticker Symbol"];

fn export_err(e: impl std::fmt::Display) -> BuzzError {
    BuzzError::Export(e.to_string())
}

/// Render `watchlist` as CSV text.
///
/// Fields containing commas or quotes are quoted.
///
/// # Errors
/// Returns `Export` if the writer fails.
pub fn to_csv(watchlist: &Watchlist) -> Result<String, BuzzError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER).map_err(export_err)?;
    for entry in watchlist {
        wtr.write_record([entry.company.as_str(), entry.ticker.as_str()])
            .map_err(export_err)?;
    }
    let bytes = wtr.into_inner().map_err(export_err)?;
    String::from_utf8(bytes).map_err(export_err)
}

/// The CSV from [`to_csv`] as a `data:file/csv;base64,...` URI.
///
/// # Errors
/// Returns `Export` if rendering the CSV fails.
pub fn csv_data_uri(watchlist: &Watchlist) -> Result<String, BuzzError> {
    let csv = to_csv(watchlist)?;
    Ok(format!(
        "data:file/csv;base64,{}",
        BASE64_STANDARD.encode(csv.as_bytes())
    ))
}

/// HTML anchor that downloads the watchlist as [`CSV_FILENAME`].
///
/// # Errors
/// Returns `Export` if rendering the CSV fails.
pub fn download_anchor(watchlist: &Watchlist) -> Result<String, BuzzError> {
    let href = csv_data_uri(watchlist)?;
    Ok(format!(
        r#"<a href="{href}" download="{CSV_FILENAME}">Download CSV File</a>"#
    ))
}
