use anyhow::Result;
use rickandmorty_lib::translate::{gender_text, status_text};
use rickandmorty_lib::types::{Character, Info};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CharacterRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Nombre")]
    #[serde(rename = "Nombre")]
    name: String,
    #[tabled(rename = "Estado")]
    #[serde(rename = "Estado")]
    status: String,
    #[tabled(rename = "Especie")]
    #[serde(rename = "Especie")]
    species: String,
    #[tabled(rename = "Género")]
    #[serde(rename = "Género")]
    gender: String,
    #[tabled(rename = "Origen")]
    #[serde(rename = "Origen")]
    origin: String,
    #[tabled(rename = "Ubicación")]
    #[serde(rename = "Ubicación")]
    location: String,
    #[tabled(rename = "Episodios")]
    #[serde(rename = "Episodios")]
    episodes: usize,
}

#[derive(Tabled, Serialize)]
struct InfoRow {
    #[tabled(rename = "Personajes")]
    #[serde(rename = "Personajes")]
    count: i64,
    #[tabled(rename = "Páginas")]
    #[serde(rename = "Páginas")]
    pages: i64,
}

// -- Row builders --

fn build_character_rows(characters: &[&Character]) -> Vec<CharacterRow> {
    characters
        .iter()
        .map(|c| CharacterRow {
            id: c.id,
            name: c.name.clone(),
            status: status_text(&c.status).to_string(),
            species: species_label(c),
            gender: gender_text(&c.gender).to_string(),
            origin: c.origin.name.clone(),
            location: c.location.name.clone(),
            episodes: c.episode.len(),
        })
        .collect()
}

fn build_info_rows(info: &Info) -> Vec<InfoRow> {
    vec![InfoRow {
        count: info.count,
        pages: info.pages,
    }]
}

/// Species, with the sub-type in parentheses when the API provides one.
fn species_label(character: &Character) -> String {
    if character.kind.is_empty() {
        character.species.clone()
    } else {
        format!("{} ({})", character.species, character.kind)
    }
}

// -- Dispatch --

pub fn print_characters(characters: &[&Character], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_characters_table(characters),
        OutputFormat::Json => print_json(&characters),
        OutputFormat::Csv => print_characters_csv(characters)?,
        OutputFormat::Markdown => print_characters_markdown(characters),
    }
    Ok(())
}

pub fn print_info(info: &Info, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_info_rows(info))),
        OutputFormat::Json => print_json(info),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build_info_rows(info) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(build_info_rows(info));
            table.with(Style::markdown());
            println!("{}", table);
        }
    }
    Ok(())
}

// -- Table output --

fn print_characters_table(characters: &[&Character]) {
    println!("{}", Table::new(build_character_rows(characters)));
}

// -- Markdown output --

fn print_characters_markdown(characters: &[&Character]) {
    let mut table = Table::new(build_character_rows(characters));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn print_characters_csv(characters: &[&Character]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_character_rows(characters) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
