//! Wire models exchanged with the blog API.

mod article;
mod user;

pub use article::{
    ArticleDetail, ArticleId, ArticleSummary, Author, CreatedArticle, ImageFile, NewArticle, Tag,
    UploadedImage,
};
pub use user::{Credentials, Registration, User};
