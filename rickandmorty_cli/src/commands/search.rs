use anyhow::Result;
use clap::Args;
use rickandmorty_lib::types::Character;
use rickandmorty_lib::{validation, DataService};

use crate::output::{print_characters, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Name to search for on the server. Blank lists the first page.
    pub name: String,
}

pub async fn run(args: &SearchArgs, service: &DataService, format: &OutputFormat) -> Result<()> {
    let name = validation::validate_search(&args.name)?;
    let characters = service.search_characters_by_name(&name).await;

    eprintln!("{} personajes encontrados", characters.len());
    let refs: Vec<&Character> = characters.iter().collect();
    print_characters(&refs, format)
}
