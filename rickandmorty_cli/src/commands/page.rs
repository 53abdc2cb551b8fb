use anyhow::Result;
use clap::Args;
use rickandmorty_lib::types::Character;
use rickandmorty_lib::{validation, DataService};

use crate::output::{print_characters, OutputFormat};

#[derive(Args)]
pub struct PageArgs {
    /// Page number (1-indexed)
    pub page: i64,
}

pub async fn run(args: &PageArgs, service: &DataService, format: &OutputFormat) -> Result<()> {
    let page = validation::validate_page(args.page)?;
    let characters = service.get_characters_by_page(page).await;

    eprintln!("Página {} ({} personajes)", page, characters.len());
    let refs: Vec<&Character> = characters.iter().collect();
    print_characters(&refs, format)
}
