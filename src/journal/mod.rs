pub mod store;
pub mod validate;

pub use store::{InMemoryStore, JsonFileStore, JournalStore};
pub use validate::{validate_entry, ValidationError};
