use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rickandmorty_lib::types::Character;
use rickandmorty_lib::DataService;

use crate::output::{print_characters, OutputFormat};

pub async fn run(service: &DataService, format: &OutputFormat) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} [{elapsed_precise}] {msg}")?);
    pb.set_message("fetching every page...");
    pb.enable_steady_tick(Duration::from_millis(120));

    let characters = service.get_every_character().await;
    pb.finish_with_message(format!("{} personajes", characters.len()));

    let refs: Vec<&Character> = characters.iter().collect();
    print_characters(&refs, format)
}
