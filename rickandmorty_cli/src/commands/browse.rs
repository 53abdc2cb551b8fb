//! Interactive name filter over the first page of characters.
//!
//! Each line read from stdin replaces the search term; the filtered list is
//! printed again after every line. EOF ends the session.

use anyhow::Result;
use rickandmorty_lib::{validation, DataService, SearchInput, ViewController};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{print_characters, OutputFormat};

pub async fn run(service: &DataService, format: &OutputFormat) -> Result<()> {
    let mut view = ViewController::new();
    eprintln!("Cargando personajes...");
    view.mount(service).await;

    if let Some(message) = view.error() {
        eprintln!("{}", message);
        return Ok(());
    }
    render(&view, format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprint!("buscar> ");
    while let Some(line) = lines.next_line().await? {
        match validation::validate_search(&line) {
            Ok(term) => {
                view.on_search_input(SearchInput::new(term));
                render(&view, format)?;
            }
            Err(e) => eprintln!("{}", e),
        }
        eprint!("buscar> ");
    }
    eprintln!();
    Ok(())
}

fn render(view: &ViewController, format: &OutputFormat) -> Result<()> {
    let filtered = view.filtered_characters();
    if filtered.is_empty() && !view.search_term().is_empty() {
        eprintln!("Sin resultados para \"{}\"", view.search_term());
        return Ok(());
    }
    eprintln!(
        "{} de {} personajes",
        filtered.len(),
        view.characters().len()
    );
    print_characters(&filtered, format)
}
