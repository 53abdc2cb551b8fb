use rickandmorty_api::types::CharacterID;

use crate::error::RickAndMortyError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_IDS: usize = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit. An empty result is allowed.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, RickAndMortyError> {
    if input.len() > max_len {
        return Err(RickAndMortyError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

/// Validate a search/name string: enforce length, strip control chars, trim.
/// An empty result means "no filter".
pub fn validate_search(input: &str) -> Result<String, RickAndMortyError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a page number: pages are 1-indexed.
pub fn validate_page(page: i64) -> Result<i64, RickAndMortyError> {
    if page < 1 {
        return Err(RickAndMortyError::InvalidInput(format!(
            "page must be 1 or greater, got {}",
            page
        )));
    }
    Ok(page)
}

/// Validate a character id: ids start at 1.
pub fn validate_id(id: CharacterID) -> Result<CharacterID, RickAndMortyError> {
    if id < 1 {
        return Err(RickAndMortyError::InvalidInput(format!(
            "character id must be 1 or greater, got {}",
            id
        )));
    }
    Ok(id)
}

/// Parse a comma-separated id list such as `"1, 2,3"`.
///
/// Duplicates are dropped keeping the first occurrence. At least one and at
/// most [`MAX_IDS`] ids are accepted.
pub fn parse_ids(input: &str) -> Result<Vec<CharacterID>, RickAndMortyError> {
    let mut ids: Vec<CharacterID> = Vec::new();
    for part in input.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id = trimmed.parse::<CharacterID>().map_err(|_| {
            RickAndMortyError::InvalidInput(format!("'{}' is not a character id", trimmed))
        })?;
        let id = validate_id(id)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    if ids.is_empty() {
        return Err(RickAndMortyError::InvalidInput(
            "at least one character id is required".to_string(),
        ));
    }
    if ids.len() > MAX_IDS {
        return Err(RickAndMortyError::InvalidInput(format!(
            "at most {} ids per request, got {}",
            MAX_IDS,
            ids.len()
        )));
    }
    Ok(ids)
}
