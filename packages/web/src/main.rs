use api::ArticleId;
use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Article, CreateArticle, Home, Login, MyArticles, NotFound, Shell, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/?:tag")]
        Home { tag: String },
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/articles/:id")]
        Article { id: ArticleId },
        #[route("/my-articles")]
        MyArticles {},
        #[route("/create-article")]
        CreateArticle {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting Articulate");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Articulate" }
        document::Link { rel: "stylesheet", href: ui::ARTICULATE_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_paths_resolve_to_routes() {
        let parse = |path: &str| path.parse::<Route>().ok();

        assert!(matches!(parse(ui::routes::HOME), Some(Route::Home { .. })));
        assert_eq!(parse(ui::routes::LOGIN), Some(Route::Login {}));
        assert_eq!(parse(ui::routes::SIGNUP), Some(Route::Signup {}));
        assert_eq!(parse(ui::routes::MY_ARTICLES), Some(Route::MyArticles {}));
        assert_eq!(parse(ui::routes::CREATE_ARTICLE), Some(Route::CreateArticle {}));
        assert_eq!(parse(&ui::routes::article(42)), Some(Route::Article { id: 42 }));
    }

    #[test]
    fn test_category_links_carry_the_tag() {
        let route = "/?tag=Design".parse::<Route>().ok();
        assert_eq!(route, Some(Route::Home { tag: "Design".into() }));
        assert_eq!(
            ui::routes::category(api::Tag::Design).parse::<Route>().ok(),
            route
        );
    }

    #[test]
    fn test_routes_render_shared_paths() {
        assert_eq!(Route::Article { id: 7 }.to_string(), ui::routes::article(7));
        assert_eq!(Route::MyArticles {}.to_string(), ui::routes::MY_ARTICLES);
    }

    #[test]
    fn test_unknown_paths_fall_through_to_not_found() {
        assert!(matches!(
            "/update-profile".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
