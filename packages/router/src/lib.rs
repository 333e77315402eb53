//! Client-side navigation for the paste application: route patterns, the
//! route table, lazily loaded views and the navigator state machine.

pub mod config;
pub mod error;
pub mod history;
pub mod lazy;
pub mod navigator;
pub mod pattern;
pub mod table;
pub mod views;

mod location;

pub use config::RouterConfig;
pub use error::{Fallback, NoRouteMatch, RouteError, ViewLoadError};
pub use lazy::{ViewCache, ViewLoader};
pub use navigator::{Activation, NavState, Navigator, Transition};
pub use pattern::{Params, RoutePattern, Segment};
pub use table::{Component, Resolution, Route, RouteTable};
pub use views::{paste_routes, PasteView};
