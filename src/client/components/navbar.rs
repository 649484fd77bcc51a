use dioxus::prelude::*;

use crate::client::router::Route;

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// Links rendered by the navigation bar, in display order.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        route: Route::Home {},
    },
    NavLink {
        label: "Questions",
        route: Route::QuestionList {},
    },
    NavLink {
        label: "Add Question",
        route: Route::AddQuestion {},
    },
];

#[component]
pub fn Navbar() -> Element {
    rsx! {
        header {
            class: "navbar",
            p { class: "navbar-title",
                "Quiz App"
            }
            nav {
                for link in NAV_LINKS {
                    Link {
                        key: "{link.label}",
                        to: link.route,
                        class: "nav-link",
                        active_class: "active",
                        "{link.label}"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
