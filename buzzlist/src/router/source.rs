use std::sync::Arc;

use buzzlist_core::{ArticleLink, BuzzError, Capability, CompanyName};

use crate::Buzzlist;

impl Buzzlist {
    /// Find the trending-stocks article on the first connector that can.
    ///
    /// # Errors
    /// Returns `SourceUnavailable` (stage `locate-article`) wrapping the
    /// provider failure; no watchlist can be built without the article.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "buzzlist::router", skip(self))
    )]
    pub async fn locate_article(&self) -> Result<ArticleLink, BuzzError> {
        self.first_success(
            Capability::LocateArticle,
            Some("trending stocks article".to_string()),
            |c| {
                c.as_article_locator()?;
                Some(async move {
                    match c.as_article_locator() {
                        Some(p) => p.locate_article().await,
                        None => Err(BuzzError::unsupported(Capability::LocateArticle.as_str())),
                    }
                })
            },
        )
        .await
        .map_err(|e| BuzzError::source_unavailable(Capability::LocateArticle.as_str(), e))
    }

    /// Extract candidate names from `article`, in document order.
    ///
    /// Duplicates and empty names are returned as found.
    ///
    /// # Errors
    /// Returns `SourceUnavailable` (stage `extract-names`) wrapping the provider failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "buzzlist::router",
            skip(self, article),
            fields(href = %article.href),
        )
    )]
    pub async fn extract_names(&self, article: &ArticleLink) -> Result<Vec<CompanyName>, BuzzError> {
        let article = Arc::new(article.clone());
        self.first_success(Capability::ExtractNames, None, |c| {
            c.as_name_extractor()?;
            let article = Arc::clone(&article);
            Some(async move {
                match c.as_name_extractor() {
                    Some(p) => p.extract_names(&article).await,
                    None => Err(BuzzError::unsupported(Capability::ExtractNames.as_str())),
                }
            })
        })
        .await
        .map_err(|e| BuzzError::source_unavailable(Capability::ExtractNames.as_str(), e))
    }

    /// Locate the article and extract its names in one step.
    ///
    /// # Errors
    /// Returns `SourceUnavailable` from whichever stage failed.
    pub async fn candidates(&self) -> Result<(ArticleLink, Vec<CompanyName>), BuzzError> {
        let article = self.locate_article().await?;
        let names = self.extract_names(&article).await?;
        #[cfg(feature = "tracing")]
        tracing::info!(target: "buzzlist::router", count = names.len(), "candidate names extracted");
        Ok((article, names))
    }
}
