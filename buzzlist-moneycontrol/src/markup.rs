//! Markup extraction for the listing and article pages.
//!
//! Everything here is synchronous: `scraper::Html` is not `Send`, so documents
//! are parsed and dropped between awaits.

use buzzlist_core::{ArticleLink, BuzzError, CompanyName};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

fn selector(css: &str) -> Result<Selector, BuzzError> {
    Selector::parse(css).map_err(|e| BuzzError::parse("css selector", e.to_string()))
}

/// First anchor whose `title` matches `title`, with its href resolved against `base`.
///
/// # Errors
/// Returns `NotFound` when no anchor matches and `Parse` when the matching
/// href cannot be turned into an absolute URL.
pub fn find_article_link(html: &str, title: &Regex, base: &Url) -> Result<ArticleLink, BuzzError> {
    let doc = Html::parse_document(html);
    let anchors = selector("a[title][href]")?;
    let hit = doc.select(&anchors).find_map(|a| {
        let t = a.value().attr("title")?;
        let href = a.value().attr("href")?;
        title.is_match(t).then(|| (t.to_string(), href.to_string()))
    });
    let Some((t, href)) = hit else {
        return Err(BuzzError::not_found(format!(
            "article link matching {}",
            title.as_str()
        )));
    };
    let href = base
        .join(href.trim())
        .map_err(|e| BuzzError::parse("article href", format!("{href}: {e}")))?;
    Ok(ArticleLink {
        title: t,
        href: href.into(),
    })
}

/// Cleaned text of every `<strong>` element, in document order.
///
/// Duplicates and empty strings are kept; an article without emphasis yields
/// an empty list.
///
/// # Errors
/// Returns `Parse` only if the built-in selector fails to compile.
pub fn extract_names(html: &str) -> Result<Vec<CompanyName>, BuzzError> {
    let doc = Html::parse_document(html);
    let strong = selector("strong")?;
    Ok(doc
        .select(&strong)
        .map(|el| clean_name(&leading_text(el)))
        .collect())
}

// The name is the element's first child when that child is text, e.g.
// `<strong>Reliance Industries:</strong> <em>shares rose</em>`. Nested markup
// falls back to the element's full text.
fn leading_text(el: ElementRef<'_>) -> String {
    match el.children().next() {
        Some(node) => match node.value().as_text() {
            Some(text) => text.to_string(),
            None => el.text().collect(),
        },
        None => String::new(),
    }
}

/// Drop every `&`, then strip leading and trailing colons.
///
/// Whitespace is left untouched, so `"Reliance: "` keeps its trailing colon
/// and space.
#[must_use]
pub fn clean_name(raw: &str) -> CompanyName {
    CompanyName::new(raw.replace('&', "").trim_matches(':'))
}
