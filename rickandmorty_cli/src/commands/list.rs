use anyhow::Result;
use clap::Args;
use rickandmorty_lib::{validation, DataService, SearchInput, ViewController};

use crate::output::{print_characters, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Only show characters whose name contains this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
}

pub async fn run(args: &ListArgs, service: &DataService, format: &OutputFormat) -> Result<()> {
    let mut view = ViewController::new();
    view.mount(service).await;

    if let Some(search) = &args.search {
        let sanitized = validation::validate_search(search)?;
        view.on_search_input(SearchInput::new(sanitized));
    }

    if let Some(message) = view.error() {
        eprintln!("{}", message);
        return Ok(());
    }

    let filtered = view.filtered_characters();
    eprintln!(
        "{} de {} personajes",
        filtered.len(),
        view.characters().len()
    );
    print_characters(&filtered, format)
}
