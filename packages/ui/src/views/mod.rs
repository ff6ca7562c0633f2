mod article;
pub use article::ArticleView;

mod create_article;
pub use create_article::CreateArticleView;

mod home;
pub use home::HomeView;

mod my_articles;
pub use my_articles::MyArticlesView;

mod not_found;
pub use not_found::NotFoundView;

mod sign_in_prompt;
pub use sign_in_prompt::SignInPrompt;
