use buzzlist_core::{Candle, Decimal, HistoricalSeries, HistoryWindow, NaiveDate, TickerSymbol};
use chrono::{Datelike, Weekday};

// (symbol, first trading day, base close)
const LISTINGS: &[(&str, (i32, u32, u32), i64)] = &[
    ("RELIANCE.NS", (2005, 1, 3), 1200),
    ("TATAMOTORS.NS", (2005, 1, 3), 450),
    ("LT.NS", (2005, 1, 3), 2100),
    ("NEWCO.NS", (2023, 12, 18), 95),
];

const LAST_SESSION: (i32, u32, u32) = (2024, 6, 28);

fn date((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Weekday candles between the listing date and a fixed last session, clipped to `window`.
pub fn by_symbol(symbol: &TickerSymbol, window: HistoryWindow) -> Option<HistoricalSeries> {
    let &(_, listed, base) = LISTINGS.iter().find(|(s, _, _)| *s == symbol.as_str())?;
    let first = date(listed)?.max(window.start());
    let last = date(LAST_SESSION)?.min(window.end());

    let mut candles = Vec::new();
    let mut day = first;
    let mut i: i64 = 0;
    while day <= last {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let close = Decimal::from(base + (i % 17) - 8);
            candles.push(Candle {
                date: day,
                open: close - Decimal::ONE,
                high: close + Decimal::TWO,
                low: close - Decimal::TWO,
                close,
                volume: Some(1_000_000 + u64::try_from(i % 5).unwrap_or(0) * 10_000),
            });
            i += 1;
        }
        day = day.succ_opt()?;
    }
    Some(HistoricalSeries {
        symbol: symbol.clone(),
        candles,
    })
}
