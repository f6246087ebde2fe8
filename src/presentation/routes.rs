/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Static route table mapping URL paths to pages

use crate::application::config::RouterConfig;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Pages the application can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// List of posts, the landing page
    PostList,
    /// Notifications of the logged-in member
    NotificationList,
    /// Login form
    Login,
}

/// Entry of the route table
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Path relative to the history base, always starting with `/`
    pub path: String,
    /// Unique route name
    pub name: String,
    /// Page rendered for this route
    pub page: Page,
    /// Whether a logged-in member is required
    pub requires_auth: bool,
}

impl Route {
    /// Creates a route open to everyone
    pub fn public(path: &str, name: &str, page: Page) -> Self {
        Self {
            path: normalize_path(path),
            name: name.to_string(),
            page,
            requires_auth: false,
        }
    }

    /// Creates a route that needs a logged-in member
    pub fn authenticated(path: &str, name: &str, page: Page) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(path, name, page)
        }
    }
}

/// Outcome of resolving a location against the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// The route can be entered
    Page(&'a Route),
    /// The route needs a logged-in member; `login` is the login route, if the table has one
    LoginRequired {
        /// Route that was asked for
        requested: &'a Route,
        /// Where to send the visitor instead
        login: Option<&'a Route>,
    },
    /// No route matches the location
    NotFound,
}

/// Route table served under a history base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    base: String,
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    /// Creates the application route table under `base_path`
    pub fn new(base_path: &str) -> Self {
        Self::with_routes(
            base_path,
            vec![
                Route::public("/", "PostList", Page::PostList),
                Route::authenticated("/notifications", "NotificationList", Page::NotificationList),
                Route::public("/login", "Login", Page::Login),
            ],
        )
    }

    /// Creates the application route table from configuration
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(&config.base_path)
    }

    /// Creates a router over an arbitrary table
    pub fn with_routes(base_path: &str, routes: Vec<Route>) -> Self {
        Self {
            base: normalize_path(base_path),
            routes,
        }
    }

    /// History base path
    pub fn base(&self) -> &str {
        &self.base
    }

    /// All routes, in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Finds a route by name
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Finds the route for a location such as `/app/notifications?page=2`
    ///
    /// Query string and fragment are ignored, as is a trailing slash. Locations outside the
    /// history base match nothing.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = normalize_path(path);
        let relative = self.strip_base(&path)?;
        self.routes.iter().find(|route| route.path == relative)
    }

    /// Resolves a location and applies the "requires authentication" flag
    pub fn navigate(&self, location: &str, authenticated: bool) -> RouteMatch<'_> {
        match self.resolve(location) {
            None => RouteMatch::NotFound,
            Some(route) if route.requires_auth && !authenticated => RouteMatch::LoginRequired {
                requested: route,
                login: self.routes.iter().find(|r| r.page == Page::Login),
            },
            Some(route) => RouteMatch::Page(route),
        }
    }

    /// Full location of a route, base path included
    pub fn href(&self, route: &Route) -> String {
        if self.base == "/" {
            return route.path.clone();
        }
        if route.path == "/" {
            return format!("{}/", self.base);
        }
        format!("{}{}", self.base, route.path)
    }

    fn strip_base(&self, path: &str) -> Option<String> {
        if self.base == "/" {
            return Some(path.to_string());
        }
        let rest = path.strip_prefix(&self.base)?;
        if rest.is_empty() {
            Some(String::from("/"))
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }
}

/// Leading slash added, trailing slashes removed, `/` kept as is
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{trimmed}")
}
