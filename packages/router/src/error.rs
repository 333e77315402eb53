use thiserror::Error;

/// Errors raised while building a route table or a link into it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// Every URL the pattern matches is already claimed by an earlier route
    #[error("route `{route}` ({pattern}) is unreachable behind route `{shadowed_by}`")]
    UnreachableRoute {
        route: String,
        pattern: String,
        shadowed_by: String,
    },

    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` needs parameter `{param}`")]
    MissingParam { route: String, param: String },
}

/// A URL that no route pattern accepts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no route matches `{url}`")]
pub struct NoRouteMatch {
    pub url: String,
}

/// A lazily loaded view implementation could not be fetched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("view unavailable: {0}")]
pub struct ViewLoadError(pub String);

impl ViewLoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Why the navigator fell back to its not-found presentation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    #[error(transparent)]
    NoRouteMatch(#[from] NoRouteMatch),

    /// The route matched but its view failed to load; the next navigation retries
    #[error("route `{route}` could not be shown: {error}")]
    ViewUnavailable {
        route: String,
        #[source]
        error: ViewLoadError,
    },
}
