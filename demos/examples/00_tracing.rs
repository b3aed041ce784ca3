use buzzlist::CompanyName;
use buzzlist_demos::common::get_buzzlist;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,buzzlist=trace,buzzlist_yahoo=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let buzz = get_buzzlist()?;

    // Source stage
    let (article, names) = buzz.candidates().await?;
    tracing::info!(title = %article.title, names = names.len(), "article read");

    // One resolution and one gate check
    let ticker = buzz.resolve(&CompanyName::from("Reliance Industries")).await?;
    let check = buzz.history_check(&ticker).await;
    tracing::info!(%ticker, passed = check.passed(), "gate evaluated");

    // Full pipeline
    let _ = buzz.watchlist().await?;

    Ok(())
}
