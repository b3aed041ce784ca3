use buzzlist_demos::common::get_buzzlist;
use chrono::NaiveDate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let buzz = get_buzzlist()?;
    let watchlist = buzz.watchlist().await?;

    let Some(company) = watchlist.names().next().cloned() else {
        println!("Watchlist is empty today.");
        return Ok(());
    };
    let selection = watchlist
        .select(&company)
        .ok_or("selected company vanished from the watchlist")?;

    let end = NaiveDate::from_ymd_opt(2024, 6, 28).ok_or("invalid end date")?;
    let series = buzz.selection_history(&selection, end).await?;

    println!("## {} ({})", selection.company, selection.ticker);
    match series.summary() {
        Some(s) => {
            println!("Observations : {}", s.observations);
            println!("Range        : {} .. {}", s.first, s.last);
            println!("Close min    : {}", s.min_close);
            println!("Close max    : {}", s.max_close);
            println!("Close mean   : {}", s.mean_close.round_dp(2));
        }
        None => println!("No history returned."),
    }

    println!("\nLast five sessions:");
    for c in series.candles.iter().rev().take(5).rev() {
        println!("{}  close {}", c.date, c.close);
    }

    Ok(())
}
