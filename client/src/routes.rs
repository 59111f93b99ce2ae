//! Client routes and the `?slide=N` query parameter.
//!
//! `/presentation/:id` and `/preview/:id` carry the current slide index in
//! the query string. A missing or unparsable `slide` reads as 0; clamping to
//! the slides that exist happens once the presentation is loaded.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use deck::PresentationId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Dashboard,
    Editor { id: PresentationId, slide: usize },
    Preview { id: PresentationId, slide: usize },
}

impl Route {
    /// Parse a path with optional query. Unknown paths map to the landing page.
    #[must_use]
    pub fn parse(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["dashboard"] => Self::Dashboard,
            ["presentation", id] => Self::Editor { id: (*id).to_owned(), slide: slide_param(query) },
            ["preview", id] => Self::Preview { id: (*id).to_owned(), slide: slide_param(query) },
            _ => Self::Landing,
        }
    }

    /// Pages that send the user to `/login` when no token is stored.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Editor { .. } | Self::Preview { .. })
    }

    /// The same page showing a different slide. Other routes are unchanged.
    #[must_use]
    pub fn with_slide(&self, index: usize) -> Self {
        match self {
            Self::Editor { id, .. } => Self::Editor { id: id.clone(), slide: index },
            Self::Preview { id, .. } => Self::Preview { id: id.clone(), slide: index },
            other => other.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landing => f.write_str("/"),
            Self::Login => f.write_str("/login"),
            Self::Register => f.write_str("/register"),
            Self::Dashboard => f.write_str("/dashboard"),
            Self::Editor { id, slide } => write!(f, "/presentation/{id}?slide={slide}"),
            Self::Preview { id, slide } => write!(f, "/preview/{id}?slide={slide}"),
        }
    }
}

fn slide_param(query: &str) -> usize {
    for pair in query.split('&') {
        if let Some(("slide", value)) = pair.split_once('=') {
            return value.parse().unwrap_or(0);
        }
    }
    0
}
