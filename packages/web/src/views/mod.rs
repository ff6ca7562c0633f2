mod articles;
pub use articles::{Article, CreateArticle, Home, MyArticles};

mod login;
pub use login::Login;

mod not_found;
pub use not_found::NotFound;

mod shell;
pub use shell::Shell;

mod signup;
pub use signup::Signup;
