use buzzlist::ExclusionReason;
use buzzlist_demos::common::get_buzzlist;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let buzz = get_buzzlist()?;

    println!("Reading today's trending stocks...");
    let report = buzz.watchlist_report().await?;

    println!("\nArticle: {}", report.article.title);
    println!("{}", report.article.href);

    println!("\n## Watchlist ({} of {} names)", report.watchlist.len(), report.names.len());
    println!("{:<35} | Ticker", "Company");
    println!("{:-<36}|{:-<16}", "", "");
    for entry in &report.watchlist {
        println!("{:<35} | {}", entry.company, entry.ticker);
    }

    if !report.exclusions.is_empty() {
        println!("\n## Dropped");
        for ex in &report.exclusions {
            let why = match &ex.reason {
                ExclusionReason::Unresolved => "no ticker found".to_string(),
                ExclusionReason::ResolveFailed(e) => format!("search failed: {e}"),
                ExclusionReason::InsufficientHistory {
                    ticker,
                    observations,
                    required,
                } => format!("{ticker}: {observations} of {required} required days"),
                ExclusionReason::HistoryLookupFailed { ticker, reason } => {
                    format!("{ticker}: history unavailable ({reason})")
                }
            };
            println!("#{:<3} {:<30} {}", ex.index, format!("{:?}", ex.company.as_str()), why);
        }
    }

    Ok(())
}
