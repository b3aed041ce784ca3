use buzzlist_core::{SearchHit, SearchRequest, SearchResponse, TickerSymbol};

const TABLE: &[(&str, &str, &str)] = &[
    ("reliance", "RELIANCE.NS", "Reliance Industries Limited"),
    ("tata motors", "TATAMOTORS.NS", "Tata Motors Limited"),
    ("larsen", "LT.NS", "Larsen & Toubro Limited"),
    ("newco", "NEWCO.NS", "Newco Listings Limited"),
];

pub fn search(req: &SearchRequest) -> SearchResponse {
    let q = req.query().to_ascii_lowercase();
    let hits = TABLE
        .iter()
        .filter(|(needle, _, _)| q.contains(needle))
        .take(req.max_results())
        .map(|(_, symbol, name)| SearchHit {
            symbol: TickerSymbol::from(*symbol),
            name: Some((*name).to_string()),
            exchange: Some("NSI".to_string()),
            kind: Some("EQUITY".to_string()),
        })
        .collect();
    SearchResponse { hits }
}
