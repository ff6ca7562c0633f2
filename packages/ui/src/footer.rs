use dioxus::prelude::*;

use crate::dates::current_year;
use crate::icons::{FaGithub, FaLinkedin, FaTwitter};
use crate::{routes, Icon};

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-columns",
                div { class: "footer-about",
                    h3 { "Articulate Blog" }
                    p { class: "muted", "Stay updated with the latest articles and insights" }
                }
                div { class: "footer-links",
                    h4 { "Categories" }
                    for tag in api::Tag::ALL {
                        Link { to: routes::category(tag), {tag.as_str()} }
                    }
                }
            }
            div { class: "container footer-bottom",
                p { class: "muted",
                    "Copyright © "
                    Link { to: routes::HOME, "Articulate" }
                    " {year}"
                }
                div { class: "social",
                    a { href: "https://github.com", aria_label: "GitHub", target: "_blank", rel: "noopener",
                        Icon { icon: FaGithub, width: 16, height: 16 }
                    }
                    a { href: "https://x.com", aria_label: "X", target: "_blank", rel: "noopener",
                        Icon { icon: FaTwitter, width: 16, height: 16 }
                    }
                    a { href: "https://www.linkedin.com", aria_label: "LinkedIn", target: "_blank", rel: "noopener",
                        Icon { icon: FaLinkedin, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
