//! Serde shapes for the Yahoo search and chart payloads, and their mapping
//! into buzzlist domain types.

use buzzlist_core::{
    BuzzError, Candle, HistoricalSeries, HistoryWindow, NaiveDate, SearchHit, SearchResponse,
    TickerSymbol,
};
use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    quotes: Option<Vec<SearchQuote>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuote {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    shortname: Option<String>,
    #[serde(default)]
    longname: Option<String>,
    #[serde(default)]
    exchange: Option<String>,
    #[serde(default)]
    quote_type: Option<String>,
}

/// Decode a search body. A missing or empty `quotes` array is an empty response.
///
/// # Errors
/// Returns `Parse` when the body is not a JSON object of the expected shape.
pub fn parse_search(body: &str) -> Result<SearchResponse, BuzzError> {
    let env: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| BuzzError::parse("search response", e.to_string()))?;
    let hits = env
        .quotes
        .unwrap_or_default()
        .into_iter()
        .filter_map(|q| {
            let symbol = q.symbol.filter(|s| !s.is_empty())?;
            Some(SearchHit {
                symbol: TickerSymbol::new(symbol),
                name: q.longname.or(q.shortname),
                exchange: q.exchange,
                kind: q.quote_type,
            })
        })
        .collect();
    Ok(SearchResponse { hits })
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    exchange_timezone_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

fn at<T: Copy>(v: &[Option<T>], i: usize) -> Option<T> {
    v.get(i).copied().flatten()
}

fn dec(v: f64) -> Option<Decimal> {
    Decimal::try_from(v).ok()
}

/// Decode a chart body into daily candles for `symbol`.
///
/// Timestamps are converted to trading dates in the exchange's time zone.
/// Rows without a close are skipped, as are rows outside `window`. A result
/// without timestamps (no trading in the range) is an empty series.
///
/// # Errors
/// Returns `NotFound` when Yahoo reports the symbol as unknown and `Parse`
/// for any other malformed payload.
pub fn parse_chart(
    symbol: &TickerSymbol,
    window: HistoryWindow,
    body: &str,
) -> Result<HistoricalSeries, BuzzError> {
    let env: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| BuzzError::parse("chart response", e.to_string()))?;

    if let Some(err) = env.chart.error {
        return Err(if err.code.eq_ignore_ascii_case("not found") {
            BuzzError::not_found(format!("history for {symbol}"))
        } else {
            BuzzError::parse("chart response", format!("{}: {}", err.code, err.description))
        });
    }

    let result = env
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| BuzzError::not_found(format!("history for {symbol}")))?;

    let tz: Tz = result
        .meta
        .exchange_timezone_name
        .as_deref()
        .and_then(|name| name.parse().ok())
        .unwrap_or(Tz::UTC);

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let timestamps = result.timestamp.unwrap_or_default();

    let mut candles: Vec<Candle> = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.into_iter().enumerate() {
        let Some(close) = at(&quote.close, i).and_then(dec) else {
            continue;
        };
        let Some(date) = trading_date(ts, tz) else {
            return Err(BuzzError::parse(
                "chart response",
                format!("timestamp out of range: {ts}"),
            ));
        };
        if !window.contains(date) {
            continue;
        }
        // Yahoo occasionally repeats the latest session; keep the later row.
        if candles.last().is_some_and(|c| c.date == date) {
            candles.pop();
        }
        candles.push(Candle {
            date,
            open: at(&quote.open, i).and_then(dec).unwrap_or(close),
            high: at(&quote.high, i).and_then(dec).unwrap_or(close),
            low: at(&quote.low, i).and_then(dec).unwrap_or(close),
            close,
            volume: at(&quote.volume, i),
        });
    }

    Ok(HistoricalSeries {
        symbol: symbol.clone(),
        candles,
    })
}

fn trading_date(ts: i64, tz: Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(&tz).date_naive())
}
