//! Route table of the paste application.
//!
//! | Path | Name | View | Notes |
//! |------|------|------|-------|
//! | `/` | `home` | [`PasteView::Home`] | |
//! | `/paste/:hash` | `paste` | [`PasteView::SinglePaste`] | `hash` is forwarded as a view input |
//! | `/pastes` | `pastes` | [`PasteView::PasteList`] | |
//! | `/about` | `about` | [`PasteView::About`] | loaded on first visit |

use crate::config::RouterConfig;
use crate::error::RouteError;
use crate::lazy::ViewLoader;
use crate::pattern::Params;
use crate::table::{Route, RouteTable};

pub const HOME: &str = "home";
pub const PASTE: &str = "paste";
pub const PASTES: &str = "pastes";
pub const ABOUT: &str = "about";

/// The views the navigator can put on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PasteView {
    Home,
    SinglePaste,
    PasteList,
    About,
}

/// Build the application's routes. `about` fetches the about view on demand.
pub fn paste_routes(
    config: &RouterConfig,
    about: impl ViewLoader<PasteView> + 'static,
) -> Result<RouteTable<PasteView>, RouteError> {
    RouteTable::new(
        &config.base_path(),
        vec![
            Route::eager("/", HOME, PasteView::Home)?,
            Route::eager("/paste/:hash", PASTE, PasteView::SinglePaste)?.with_props(),
            Route::eager("/pastes", PASTES, PasteView::PasteList)?,
            Route::lazy("/about", ABOUT, about)?,
        ],
    )
}

/// Link to a single paste.
pub fn paste_href(table: &RouteTable<PasteView>, hash: &str) -> Result<String, RouteError> {
    table.href(PASTE, &Params::new().with("hash", hash))
}
