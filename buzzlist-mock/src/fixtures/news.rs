use buzzlist_core::{ArticleLink, CompanyName};

pub fn article() -> ArticleLink {
    ArticleLink {
        title: "Buzzing Stocks | Reliance, Tata Motors, L&T and others in news today".to_string(),
        href: "https://mock.buzzlist.invalid/news/business/markets/buzzing-stocks.html"
            .to_string(),
    }
}

/// Names as the extractor would return them, duplicate included.
pub fn names() -> Vec<CompanyName> {
    [
        "Reliance Industries",
        "Tata Motors",
        "Larsen  Toubro",
        "Newco Listings",
        "Unknown Startup",
        "Reliance Industries",
    ]
    .into_iter()
    .map(CompanyName::from)
    .collect()
}
