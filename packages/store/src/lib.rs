pub mod error;
pub mod models;
pub mod source;

mod memory;
pub use memory::MemoryPasteSource;

pub use error::{PasteError, StoreError};
pub use models::{NewPaste, PasteEntry, PasteListing};
pub use source::PasteSource;
