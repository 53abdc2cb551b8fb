use anyhow::Result;
use clap::Args;
use rickandmorty_lib::types::Character;
use rickandmorty_lib::{validation, DataService};

use crate::output::{print_characters, OutputFormat};

#[derive(Args)]
pub struct MultiArgs {
    /// Comma-separated character IDs (e.g. 1,2,183)
    pub ids: String,
}

pub async fn run(args: &MultiArgs, service: &DataService, format: &OutputFormat) -> Result<()> {
    let ids = validation::parse_ids(&args.ids)?;
    let characters = service.get_multiple_characters(&ids).await;

    eprintln!("{} de {} personajes", characters.len(), ids.len());
    let refs: Vec<&Character> = characters.iter().collect();
    print_characters(&refs, format)
}
