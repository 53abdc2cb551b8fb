//! Library layer for the Rick and Morty character browser: fail-soft data
//! service, list view state, Spanish labels and input validation.
//!
//! Wraps the `rickandmorty_api` client so the presentation layer always
//! receives something displayable.

pub mod config;
pub mod controller;
pub mod error;
pub mod service;
pub mod translate;
pub mod validation;

pub use rickandmorty_api;
pub use rickandmorty_api::types;
pub use rickandmorty_api::{CharacterQuery, Query};

pub use config::ServiceConfig;
pub use controller::{filter_characters, CharacterSource, SearchInput, ViewController};
pub use error::RickAndMortyError;
pub use service::DataService;
