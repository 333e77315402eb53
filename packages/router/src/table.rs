//! # Route table
//!
//! An ordered list of [`Route`]s plus the base path the application is served
//! under. [`RouteTable::resolve`] strips the base path, decodes the remaining
//! segments and returns the first route whose pattern matches. Declaration
//! order is the tie-break: `/paste/new` declared before `/paste/:hash` wins for
//! that one URL, and `/paste/:hash` takes everything else.
//!
//! Construction rejects tables that could never behave as written: duplicate
//! route names, and routes whose every URL is already claimed by an earlier
//! route.

use std::fmt;
use std::sync::Arc;

use crate::error::{NoRouteMatch, RouteError};
use crate::lazy::ViewLoader;
use crate::location::{decode_segments, normalize_base, path_of, strip_base};
use crate::pattern::{Params, RoutePattern};

/// How a route's view is obtained.
pub enum Component<V> {
    /// Available immediately.
    Eager(V),
    /// Fetched on first activation.
    Lazy(Arc<dyn ViewLoader<V>>),
}

impl<V: fmt::Debug> fmt::Debug for Component<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Eager(view) => f.debug_tuple("Eager").field(view).finish(),
            Component::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// A URL pattern bound to a view.
#[derive(Debug)]
pub struct Route<V> {
    pattern: RoutePattern,
    name: String,
    component: Component<V>,
    props: bool,
}

impl<V> Route<V> {
    pub fn new(
        path: &str,
        name: impl Into<String>,
        component: Component<V>,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: RoutePattern::parse(path)?,
            name: name.into(),
            component,
            props: false,
        })
    }

    pub fn eager(path: &str, name: impl Into<String>, view: V) -> Result<Self, RouteError> {
        Self::new(path, name, Component::Eager(view))
    }

    pub fn lazy(
        path: &str,
        name: impl Into<String>,
        loader: impl ViewLoader<V> + 'static,
    ) -> Result<Self, RouteError> {
        Self::new(path, name, Component::Lazy(Arc::new(loader)))
    }

    /// Forward matched parameters to the view as inputs.
    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn component(&self) -> &Component<V> {
        &self.component
    }

    pub fn props(&self) -> bool {
        self.props
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.component, Component::Lazy(_))
    }
}

/// A successful match: the route and the parameters captured from the URL.
#[derive(Debug)]
pub struct Resolution<V> {
    pub route: Arc<Route<V>>,
    pub params: Params,
}

/// Ordered routes served under a base path.
#[derive(Debug)]
pub struct RouteTable<V> {
    base: String,
    routes: Vec<Arc<Route<V>>>,
}

impl<V> RouteTable<V> {
    /// Build a table, checking names are unique and every route reachable.
    pub fn new(base_path: &str, routes: Vec<Route<V>>) -> Result<Self, RouteError> {
        for (idx, route) in routes.iter().enumerate() {
            for earlier in &routes[..idx] {
                if earlier.name == route.name {
                    return Err(RouteError::DuplicateName(route.name.clone()));
                }
                if earlier.pattern.covers(&route.pattern) {
                    return Err(RouteError::UnreachableRoute {
                        route: route.name.clone(),
                        pattern: route.pattern.as_str().to_string(),
                        shadowed_by: earlier.name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            base: normalize_base(base_path),
            routes: routes.into_iter().map(Arc::new).collect(),
        })
    }

    /// Normalised base path, empty for the site root.
    pub fn base_path(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter().map(|r| r.as_ref())
    }

    pub fn get(&self, name: &str) -> Option<&Route<V>> {
        self.routes().find(|r| r.name == name)
    }

    /// Match a location against the table. First declared match wins.
    pub fn resolve(&self, url: &str) -> Result<Resolution<V>, NoRouteMatch> {
        let miss = || NoRouteMatch {
            url: url.to_string(),
        };

        let path = strip_base(path_of(url), &self.base).ok_or_else(miss)?;
        let segments = decode_segments(path).ok_or_else(miss)?;

        self.routes
            .iter()
            .find_map(|route| {
                route.pattern.matches(&segments).map(|params| Resolution {
                    route: route.clone(),
                    params,
                })
            })
            .ok_or_else(miss)
    }

    /// Build the URL of a named route, base path included.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        let path = route.pattern.build(&route.name, params)?;
        if self.base.is_empty() {
            Ok(path)
        } else if path == "/" {
            Ok(self.base.clone())
        } else {
            Ok(format!("{}{}", self.base, path))
        }
    }
}
