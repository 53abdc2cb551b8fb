use anyhow::Result;
use clap::Args;
use rickandmorty_lib::{validation, DataService};

use crate::output::{print_characters, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Character ID
    pub id: i64,
}

pub async fn run(args: &ShowArgs, service: &DataService, format: &OutputFormat) -> Result<()> {
    let id = validation::validate_id(args.id)?;
    match service.get_character_by_id(id).await {
        Some(character) => print_characters(&[&character], format),
        None => {
            eprintln!("Personaje {} no encontrado", id);
            Ok(())
        }
    }
}
