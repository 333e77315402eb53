//! # Fetching collaborator contract
//!
//! Views never talk to the backend directly. They go through a [`PasteSource`],
//! which owns transport and persistence and hands back fully populated
//! [`PasteEntry`] values. The same views work against the HTTP backend, the
//! in-memory [`crate::MemoryPasteSource`], or any future implementation.
//!
//! | Method | Backend endpoint | Description |
//! |--------|------------------|-------------|
//! | [`get_paste`](PasteSource::get_paste) | `GET /api/v1/paste/{hash}` | One paste including its body. Counts as a view. |
//! | [`list_pastes`](PasteSource::list_pastes) | `GET /api/v1/pastes` | All pastes ordered by creation date, bodies left empty. |
//! | [`create_paste`](PasteSource::create_paste) | `POST /api/v1/create` | Store a [`NewPaste`]. Returns the new entry with its assigned `hash` and an empty body. |

use crate::error::StoreError;
use crate::models::{NewPaste, PasteEntry};

/// Base path of the backend's JSON API.
pub const API_PREFIX: &str = "/api/v1";

/// Backend path for a single paste.
pub fn paste_endpoint(hash: &str) -> String {
    format!("{API_PREFIX}/paste/{hash}")
}

/// Backend path for the listing.
pub fn pastes_endpoint() -> String {
    format!("{API_PREFIX}/pastes")
}

/// Backend path that creates a paste.
pub fn create_endpoint() -> String {
    format!("{API_PREFIX}/create")
}

/// Async trait for loading pastes from wherever they live.
pub trait PasteSource {
    fn get_paste(
        &self,
        hash: &str,
    ) -> impl std::future::Future<Output = Result<PasteEntry, StoreError>>;
    fn list_pastes(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<PasteEntry>, StoreError>>;
    fn create_paste(
        &self,
        paste: &NewPaste,
    ) -> impl std::future::Future<Output = Result<PasteEntry, StoreError>>;
}
