use buzzlist::{Buzzlist, CompanyName};
use buzzlist_demos::common::get_connectors;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Resolve with a wider search to show the candidate quotes.
    let buzz = get_connectors()
        .into_iter()
        .fold(Buzzlist::builder(), |b, c| b.with_connector(c))
        .quotes_count(5)
        .build()?;

    for name in ["Tata Motors", "Larsen  Toubro", "Unknown Startup"] {
        let name = CompanyName::from(name);
        let req = buzz.search_request(&name);
        let resp = buzz.search(&req).await?;

        println!("\n## {name}");
        if resp.hits.is_empty() {
            println!("(no match)");
            continue;
        }
        println!("{:<16} | {:<40} | Exchange", "Symbol", "Name");
        println!("{:-<17}|{:-<42}|{:-<10}", "", "", "");
        for hit in &resp.hits {
            println!(
                "{:<16} | {:<40} | {}",
                hit.symbol,
                hit.name.clone().unwrap_or_default(),
                hit.exchange.clone().unwrap_or_default()
            );
        }
        println!("-> first quote wins: {}", resp.best_symbol());
    }

    Ok(())
}
