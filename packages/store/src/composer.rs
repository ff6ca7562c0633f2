//! # Article composer
//!
//! Authoring an article takes two independent requests sharing one draft:
//!
//! 1. **Upload** the preview image ([`begin_upload`](Composer::begin_upload) →
//!    `ApiClient::upload_image` → [`finish_upload`](Composer::finish_upload)).
//!    Success writes the returned `secure_url` into the draft. While a request
//!    is out, [`upload_status`](Composer::upload_status) is
//!    [`UploadStatus::Uploading`]; the UI shows an indeterminate busy
//!    indicator rather than a percentage it can't measure.
//! 2. **Publish** ([`begin_submit`](Composer::begin_submit) →
//!    `ApiClient::create_article` → [`finish_submit`](Composer::finish_submit)).
//!    `begin_submit` checks the local preconditions and hands back the request
//!    body only when they hold, so a draft with no preview image never reaches
//!    the network.
//!
//! Only one publish can be outstanding, and publishing waits for uploads.
//! Picking a second image while the first is still uploading supersedes it.

use api::{ApiError, ArticleId, CreatedArticle, NewArticle, Tag, UploadedImage};
use thiserror::Error;

pub const UPLOAD_FALLBACK: &str = "Image upload failed";
pub const CREATE_FALLBACK: &str = "Failed to create article";
pub const DEFAULT_MINUTES_TO_READ: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    #[error("Preview image is required")]
    MissingPreviewImage,
    #[error("Please wait for the image upload to finish")]
    UploadInProgress,
    #[error("The article is already being published")]
    AlreadySubmitting,
    #[error("{0}")]
    Upload(String),
    #[error("{0}")]
    Create(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub tag: Tag,
    pub preview_text: String,
    pub content: String,
    pub preview_image: String,
    pub minutes_to_read: u32,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            tag: Tag::default(),
            preview_text: String::new(),
            content: String::new(),
            preview_image: String::new(),
            minutes_to_read: DEFAULT_MINUTES_TO_READ,
        }
    }
}

impl ArticleDraft {
    /// Apply the minutes-to-read number input. Values below 1 are raised to 1;
    /// unparseable input leaves the previous value.
    pub fn set_minutes_to_read(&mut self, raw: &str) {
        if let Ok(minutes) = raw.trim().parse::<i64>() {
            self.minutes_to_read = minutes.clamp(1, i64::from(u32::MAX)) as u32;
        }
    }

    pub fn set_tag(&mut self, label: &str) {
        if let Some(tag) = Tag::parse(label) {
            self.tag = tag;
        }
    }

    fn to_request(&self) -> NewArticle {
        NewArticle {
            title: self.title.trim().to_string(),
            tag: self.tag,
            preview_text: self.preview_text.clone(),
            content: self.content.clone(),
            preview_image: self.preview_image.clone(),
            minutes_to_read: self.minutes_to_read,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
}

/// Identifies one upload so a superseded one can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    pub draft: ArticleDraft,
    upload: UploadStatus,
    upload_generation: u64,
    submitting: bool,
    error: Option<ComposerError>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_status(&self) -> UploadStatus {
        self.upload
    }

    pub fn is_uploading(&self) -> bool {
        self.upload == UploadStatus::Uploading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the publish control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.is_uploading()
    }

    pub fn error(&self) -> Option<&ComposerError> {
        self.error.as_ref()
    }

    pub fn begin_upload(&mut self) -> UploadTicket {
        self.error = None;
        self.upload = UploadStatus::Uploading;
        self.upload_generation += 1;
        UploadTicket(self.upload_generation)
    }

    pub fn finish_upload(&mut self, ticket: UploadTicket, result: Result<UploadedImage, ApiError>) {
        if ticket.0 != self.upload_generation {
            tracing::debug!("Ignoring superseded image upload");
            return;
        }
        self.upload = UploadStatus::Idle;
        match result {
            Ok(image) => {
                tracing::info!("Preview image uploaded");
                self.draft.preview_image = image.secure_url;
            }
            Err(e) => {
                self.error = Some(ComposerError::Upload(e.message_or(UPLOAD_FALLBACK)));
            }
        }
    }

    /// Check local preconditions and return the body to publish.
    pub fn begin_submit(&mut self) -> Result<NewArticle, ComposerError> {
        if self.submitting {
            return Err(ComposerError::AlreadySubmitting);
        }
        self.error = None;

        let precondition = if self.is_uploading() {
            Some(ComposerError::UploadInProgress)
        } else if self.draft.preview_image.trim().is_empty() {
            Some(ComposerError::MissingPreviewImage)
        } else {
            None
        };
        if let Some(err) = precondition {
            self.error = Some(err.clone());
            return Err(err);
        }

        self.submitting = true;
        Ok(self.draft.to_request())
    }

    /// Record the publish result; returns the new article's id on success.
    pub fn finish_submit(&mut self, result: Result<CreatedArticle, ApiError>) -> Option<ArticleId> {
        self.submitting = false;
        match result {
            Ok(created) => {
                tracing::info!("Published article {}", created.id);
                Some(created.id)
            }
            Err(e) => {
                self.error = Some(ComposerError::Create(e.message_or(CREATE_FALLBACK)));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiClient, ApiConfig, ImageFile, MemoryBackend, Method};
    use serde_json::json;

    fn client() -> ApiClient<MemoryBackend> {
        ApiClient::new(ApiConfig::default(), MemoryBackend::new())
    }

    fn image() -> ImageFile {
        ImageFile {
            name: "cover.png".into(),
            mime: Some("image/png".into()),
            bytes: vec![0x89, 0x50],
        }
    }

    #[test]
    fn test_defaults() {
        let composer = Composer::new();
        assert_eq!(composer.draft.tag, Tag::Engineering);
        assert_eq!(composer.draft.minutes_to_read, 5);
        assert!(composer.can_submit());
    }

    #[test]
    fn test_missing_preview_image_fails_locally() {
        let client = client();
        let mut composer = Composer::new();
        composer.draft.title = "Title".into();

        let err = composer.begin_submit().unwrap_err();
        assert_eq!(err, ComposerError::MissingPreviewImage);
        assert_eq!(err.to_string(), "Preview image is required");
        assert_eq!(composer.error(), Some(&ComposerError::MissingPreviewImage));
        assert!(!composer.is_submitting());
        assert_eq!(client.backend().request_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_then_publish() {
        let client = client();
        client
            .backend()
            .respond(Method::Post, "/upload-image", 200, json!({"secure_url": "https://cdn/x.png"}))
            .respond(Method::Post, "/articles/create", 201, json!({"id": 77, "title": "T"}));

        let mut composer = Composer::new();
        composer.draft.title = "T".into();

        let ticket = composer.begin_upload();
        assert_eq!(composer.upload_status(), UploadStatus::Uploading);
        assert!(!composer.can_submit());
        composer.finish_upload(ticket, client.upload_image(image()).await);
        assert_eq!(composer.draft.preview_image, "https://cdn/x.png");
        assert!(composer.can_submit());

        let body = composer.begin_submit().unwrap();
        assert_eq!(body.preview_image, "https://cdn/x.png");
        assert_eq!(composer.begin_submit(), Err(ComposerError::AlreadySubmitting));

        let id = composer.finish_submit(client.create_article(&body).await);
        assert_eq!(id, Some(77));
        assert!(!composer.is_submitting());
        assert_eq!(client.backend().request_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_upload_resets_indicator() {
        let client = client();
        client
            .backend()
            .respond(Method::Post, "/upload-image", 413, json!({"error": "File too large"}));

        let mut composer = Composer::new();
        let ticket = composer.begin_upload();
        composer.finish_upload(ticket, client.upload_image(image()).await);

        assert_eq!(composer.upload_status(), UploadStatus::Idle);
        assert_eq!(composer.error(), Some(&ComposerError::Upload("File too large".into())));
        assert!(composer.draft.preview_image.is_empty());
    }

    #[test]
    fn test_publish_waits_for_upload() {
        let mut composer = Composer::new();
        composer.draft.preview_image = "https://cdn/old.png".into();
        let _ticket = composer.begin_upload();

        assert_eq!(composer.begin_submit(), Err(ComposerError::UploadInProgress));
        assert!(!composer.is_submitting());
    }

    #[test]
    fn test_superseded_upload_is_ignored() {
        let mut composer = Composer::new();
        let first = composer.begin_upload();
        let second = composer.begin_upload();

        composer.finish_upload(
            second,
            Ok(UploadedImage {
                secure_url: "https://cdn/second.png".into(),
            }),
        );
        composer.finish_upload(
            first,
            Ok(UploadedImage {
                secure_url: "https://cdn/first.png".into(),
            }),
        );
        assert_eq!(composer.draft.preview_image, "https://cdn/second.png");
    }

    #[tokio::test]
    async fn test_create_failure_surfaces_fallback() {
        let client = client();
        client.backend().respond_raw(Method::Post, "/articles/create", 500, b"");

        let mut composer = Composer::new();
        composer.draft.preview_image = "https://cdn/x.png".into();
        let body = composer.begin_submit().unwrap();
        let id = composer.finish_submit(client.create_article(&body).await);

        assert_eq!(id, None);
        assert_eq!(composer.error().map(|e| e.to_string()).as_deref(), Some(CREATE_FALLBACK));
        assert!(composer.can_submit());
    }

    #[test]
    fn test_minutes_input() {
        let mut draft = ArticleDraft::default();
        draft.set_minutes_to_read("12");
        assert_eq!(draft.minutes_to_read, 12);
        draft.set_minutes_to_read("0");
        assert_eq!(draft.minutes_to_read, 1);
        draft.set_minutes_to_read("abc");
        assert_eq!(draft.minutes_to_read, 1);
        draft.set_tag("product");
        assert_eq!(draft.tag, Tag::Product);
    }
}
