//! View state for the character list and the name filter derived from it.

use std::future::Future;

use rickandmorty_api::types::Character;

use crate::error::RickAndMortyError;

/// Message shown when the initial load fails.
pub const LOAD_ERROR_MESSAGE: &str =
    "No se pudieron cargar los personajes. Verifica tu conexión a internet.";

/// Anything the controller can load its character list from.
pub trait CharacterSource {
    fn load_characters(&self) -> impl Future<Output = Result<Vec<Character>, RickAndMortyError>>;
}

/// A change of the search box contents.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Current text of the input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Characters whose name contains `term`, ignoring case and surrounding
/// whitespace. A blank term keeps every character. Order is preserved.
pub fn filter_characters<'a>(characters: &'a [Character], term: &str) -> Vec<&'a Character> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return characters.iter().collect();
    }
    characters
        .iter()
        .filter(|character| character.name.to_lowercase().contains(&term))
        .collect()
}

/// State behind the character list view.
///
/// Starts out loading with no characters, no error and an empty search term.
/// The filtered list is derived on demand, so it always reflects the current
/// characters and search term.
#[derive(Debug)]
pub struct ViewController {
    characters: Vec<Character>,
    loading: bool,
    error: Option<String>,
    search_term: String,
    mounted: bool,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            loading: true,
            error: None,
            search_term: String::new(),
            mounted: false,
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The characters matching the current search term.
    pub fn filtered_characters(&self) -> Vec<&Character> {
        filter_characters(&self.characters, &self.search_term)
    }

    /// Performs the initial load. Only the first call does anything.
    pub async fn mount<S: CharacterSource>(&mut self, source: &S) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.load_characters(source).await;
    }

    /// Replaces the character list with a fresh load from `source`.
    ///
    /// On failure the previous list is kept and a user-facing message is set.
    pub async fn load_characters<S: CharacterSource>(&mut self, source: &S) {
        self.loading = true;
        self.error = None;

        match source.load_characters().await {
            Ok(characters) => {
                tracing::debug!("Loaded {} characters", characters.len());
                self.characters = characters;
                self.loading = false;
            }
            Err(e) => {
                tracing::error!("Error loading characters: {}", e);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                self.loading = false;
            }
        }
    }

    pub fn on_search_input(&mut self, event: SearchInput) {
        self.search_term = event.value;
    }
}
