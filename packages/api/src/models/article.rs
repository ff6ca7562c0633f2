//! Article listing, detail, and authoring payloads.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type ArticleId = i64;

/// Article categories offered by the authoring form and the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tag {
    #[default]
    Engineering,
    Product,
    Design,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Engineering, Tag::Product, Tag::Design];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Engineering => "Engineering",
            Tag::Product => "Product",
            Tag::Design => "Design",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(label: &str) -> Option<Tag> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label.trim()))
    }

    /// Whether an article's free-form tag string names this tag.
    pub fn matches(self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag.trim())
    }
}

/// Author block embedded in listing entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Author {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// An article as shown in listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub preview_text: String,
    #[serde(default)]
    pub preview_image: String,
    /// `/my-articles` reports this field as `created_at`.
    #[serde(default, alias = "created_at")]
    pub date: String,
    #[serde(default)]
    pub minutes_to_read: u32,
    #[serde(default)]
    pub user: Option<Author>,
}

impl ArticleSummary {
    /// Calendar day the article was published, if the date string is recognisable.
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn author_name(&self) -> &str {
        self.user.as_ref().map(|u| u.username.as_str()).unwrap_or("")
    }

    pub fn author_avatar(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.avatar.as_deref())
            .unwrap_or("")
    }

    /// Whether two records describe the same article in the fields both views show.
    pub fn agrees_with(&self, other: &ArticleSummary) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.tag == other.tag
            && self.date == other.date
            && self.minutes_to_read == other.minutes_to_read
    }
}

/// A single article with its full markdown body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    #[serde(default)]
    pub content: String,
    /// Display name of the author, when the API sends one separately from `user`.
    #[serde(default)]
    pub author: Option<String>,
}

impl ArticleDetail {
    pub fn author_name(&self) -> &str {
        match self.author.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.summary.author_name(),
        }
    }
}

/// Body posted to `/articles/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub tag: Tag,
    pub preview_text: String,
    pub content: String,
    pub preview_image: String,
    pub minutes_to_read: u32,
}

/// Response of `/articles/create`; only the id is needed to navigate.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedArticle {
    pub id: ArticleId,
}

/// Response of `/upload-image`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadedImage {
    pub secure_url: String,
}

/// A file picked in the browser, read into memory for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[{
        "id": 42,
        "title": "Shipping Rust to the browser",
        "tag": "Engineering",
        "preview_text": "WASM in production",
        "preview_image": "https://img.example.com/42.png",
        "date": "2024-11-03",
        "minutes_to_read": 7,
        "user": {"id": 1, "username": "ada", "avatar": "https://img.example.com/ada.png"}
    }]"#;

    const DETAIL: &str = r#"{
        "id": 42,
        "title": "Shipping Rust to the browser",
        "tag": "Engineering",
        "preview_text": "WASM in production",
        "preview_image": "https://img.example.com/42.png",
        "date": "2024-11-03",
        "minutes_to_read": 7,
        "author": "Ada Lovelace",
        "content": "Hello **world**"
    }"#;

    #[test]
    fn test_listing_and_detail_agree() {
        let listing: Vec<ArticleSummary> = serde_json::from_str(LISTING).unwrap();
        let detail: ArticleDetail = serde_json::from_str(DETAIL).unwrap();

        assert!(listing[0].agrees_with(&detail.summary));
        assert_eq!(detail.content, "Hello **world**");
        assert_eq!(detail.author_name(), "Ada Lovelace");
        assert_eq!(listing[0].author_name(), "ada");
    }

    #[test]
    fn test_my_articles_created_at_alias() {
        let json = r#"{"id": 3, "title": "Draft", "created_at": "2024-02-29 10:15:00", "minutes_to_read": 2}"#;
        let summary: ArticleSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.date, "2024-02-29 10:15:00");
        assert_eq!(
            summary.published_on(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(summary.user.is_none());
        assert_eq!(summary.author_avatar(), "");
    }

    #[test]
    fn test_published_on_formats() {
        let mut summary: ArticleSummary = serde_json::from_str(&LISTING[1..LISTING.len() - 1]).unwrap();
        let nov3 = NaiveDate::from_ymd_opt(2024, 11, 3);

        summary.date = "2024-11-03T08:00:00Z".into();
        assert_eq!(summary.published_on(), nov3);
        summary.date = "Sun, 03 Nov 2024 08:00:00 GMT".into();
        assert_eq!(summary.published_on(), nov3);
        summary.date = "last tuesday".into();
        assert_eq!(summary.published_on(), None);
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(Tag::parse("design"), Some(Tag::Design));
        assert_eq!(Tag::parse("Marketing"), None);
        assert!(Tag::Product.matches("product"));
        assert_eq!(serde_json::to_string(&Tag::Engineering).unwrap(), r#""Engineering""#);
    }

    #[test]
    fn test_new_article_body() {
        let body = NewArticle {
            title: "T".into(),
            tag: Tag::Design,
            preview_text: "P".into(),
            content: "C".into(),
            preview_image: "https://img/x.png".into(),
            minutes_to_read: 5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["tag"], "Design");
        assert_eq!(json["minutes_to_read"], 5);
    }
}
