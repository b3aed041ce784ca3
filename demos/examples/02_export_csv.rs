use buzzlist::export::{self, CSV_FILENAME};
use buzzlist_demos::common::get_buzzlist;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let buzz = get_buzzlist()?;
    let watchlist = buzz.watchlist().await?;

    // 1. Plain CSV text.
    let csv = export::to_csv(&watchlist)?;
    println!("## {CSV_FILENAME}\n{csv}");

    // 2. The same content as a downloadable link.
    let anchor = export::download_anchor(&watchlist)?;
    println!("## HTML download link\n{anchor}");

    Ok(())
}
