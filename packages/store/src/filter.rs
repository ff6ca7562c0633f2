//! Client-side narrowing of the home listing by tag chip and search box.

use api::{ArticleSummary, Tag};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// `None` is the "All" chip.
    pub tag: Option<Tag>,
    pub query: String,
}

impl ArticleFilter {
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.query.trim().is_empty()
    }

    /// Case-insensitive: the tag must match exactly, the query may appear
    /// anywhere in the title or preview text.
    pub fn matches(&self, article: &ArticleSummary) -> bool {
        if let Some(tag) = self.tag {
            if !tag.matches(&article.tag) {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || article.title.to_lowercase().contains(&query)
            || article.preview_text.to_lowercase().contains(&query)
    }

    pub fn apply<'a>(&self, articles: &'a [ArticleSummary]) -> Vec<&'a ArticleSummary> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}
