//! Spanish display labels for the API's enumerated fields.
//!
//! Matching is case-insensitive. Values outside the known set are returned
//! unchanged so new upstream values still render.

/// Spanish label for a character status.
pub fn status_text(status: &str) -> &str {
    match status.to_lowercase().as_str() {
        "alive" => "Vivo",
        "dead" => "Muerto",
        "unknown" => "Desconocido",
        _ => status,
    }
}

/// Spanish label for a character gender.
pub fn gender_text(gender: &str) -> &str {
    match gender.to_lowercase().as_str() {
        "male" => "Masculino",
        "female" => "Femenino",
        "genderless" => "Sin género",
        "unknown" => "Desconocido",
        _ => gender,
    }
}
