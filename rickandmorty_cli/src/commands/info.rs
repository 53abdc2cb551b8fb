use anyhow::Result;
use rickandmorty_lib::DataService;

use crate::output::{print_info, OutputFormat};

pub async fn run(service: &DataService, format: &OutputFormat) -> Result<()> {
    match service.get_api_info().await {
        Some(info) => print_info(&info, format),
        None => {
            eprintln!("No se pudo obtener la información de la API");
            Ok(())
        }
    }
}
