//! Typed client for the public Rick and Morty REST API.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, ErrorKind};
pub use self::query::{CharacterQuery, Query, QueryCommon};
