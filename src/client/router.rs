use std::collections::HashSet;

use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{AddQuestion, Home, NotFound, QuestionList},
};
use crate::error::route::RouteTableError;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/questions")]
    QuestionList {},

    #[route("/add-question")]
    AddQuestion {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// The top-level views a route can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    QuestionList,
    AddQuestion,
    NotFound,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::QuestionList => "QuestionList",
            Self::AddQuestion => "AddQuestion",
            Self::NotFound => "NotFound",
        }
    }
}

impl Route {
    /// The view mounted when this route is current.
    pub fn view(&self) -> View {
        match self {
            Self::Home {} => View::Landing,
            Self::QuestionList {} => View::QuestionList,
            Self::AddQuestion {} => View::AddQuestion,
            Self::NotFound { .. } => View::NotFound,
        }
    }

    /// Resolves a URL path to a route, unregistered paths resolve to `NotFound`.
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| Self::NotFound {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// A registered path and the view it mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

/// Every path the application registers. Paths outside this table render `NotFound`.
pub const ROUTE_TABLE: [RouteEntry; 3] = [
    RouteEntry {
        path: "/",
        view: View::Landing,
    },
    RouteEntry {
        path: "/questions",
        view: View::QuestionList,
    },
    RouteEntry {
        path: "/add-question",
        view: View::AddQuestion,
    },
];

/// Checks that table paths are unique and each one mounts the view it is registered with.
///
/// Run once at startup before the router is launched.
pub fn validate_route_table(table: &[RouteEntry]) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();

    for entry in table {
        if !seen.insert(entry.path) {
            return Err(RouteTableError::DuplicatePath(entry.path));
        }

        let route = Route::resolve(entry.path);
        if route.view() != entry.view || route.to_string() != entry.path {
            return Err(RouteTableError::Unresolved {
                path: entry.path,
                view: entry.view.name(),
            });
        }
    }

    Ok(())
}
