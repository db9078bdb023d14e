//! Explicit path -> page routing, resolved once per request.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Privacy,
    Calculator,
    NotFound,
}

impl Page {
    /// Pages reachable by navigation, in menu order.
    pub const NAVIGABLE: [Page; 4] = [Page::Home, Page::About, Page::Calculator, Page::Privacy];

    /// Canonical path of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Privacy => "/privacy",
            Page::Calculator => "/calculator",
            Page::NotFound => "/404",
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Home => "hero.title",
            Page::About => "about.title",
            Page::Privacy => "privacy.title",
            Page::Calculator => "calculator.title",
            Page::NotFound => "notFound.title",
        }
    }

    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("nav.home"),
            Page::About => Some("nav.about"),
            Page::Privacy => Some("nav.privacy"),
            Page::Calculator => Some("nav.calculator"),
            Page::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches the path exactly (after normalisation).
    Exact(&'static str),
    /// Matches the path itself and anything below it (`/privacy`, `/privacy/et`).
    Prefix(&'static str),
}

impl RoutePattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(p) => path == *p,
            RoutePattern::Prefix(p) => {
                path == *p
                    || path
                        .strip_prefix(p)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Ordered route table; the first matching pattern wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRouter {
    routes: Vec<(RoutePattern, Page)>,
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new()
            .route(RoutePattern::Exact("/"), Page::Home)
            .route(RoutePattern::Prefix("/privacy"), Page::Privacy)
            .route(RoutePattern::Exact("/about"), Page::About)
            .route(RoutePattern::Exact("/calculator"), Page::Calculator)
    }
}

impl PageRouter {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(mut self, pattern: RoutePattern, page: Page) -> Self {
        self.routes.push((pattern, page));
        self
    }

    /// Resolve a request path (query and fragment ignored) to a page.
    pub fn resolve(&self, path: &str) -> Page {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|(pattern, _)| pattern.matches(&path))
            .map(|(_, page)| *page)
            .unwrap_or(Page::NotFound)
    }
}

/// Strip query/fragment and trailing slashes; the root stays `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
