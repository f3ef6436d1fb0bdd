use parchment::{DocKind, ExportError, ExportOutcome, ExportPipelineBuilder};
use serde_json::{Value, from_str};
use std::env;
use std::fs;
use std::process;

/// A simple CLI to export a record JSON file as a PDF document.
#[tokio::main]
async fn main() -> Result<(), ExportError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Export a school record as a PDF document.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/record.json> <certificate|transcript|id-card> <output-dir>",
            args[0]
        );
        process::exit(1);
    }

    let record_path = &args[1];
    let kind: DocKind = match args[2].parse() {
        Ok(kind) => kind,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };
    let output_dir = &args[3];

    println!("Loading record from {}", record_path);
    let record_str = fs::read_to_string(record_path)?;
    let record: Value = from_str(&record_str).map_err(|e| {
        ExportError::Worker(format!("record is not valid JSON: {}", e))
    })?;

    let pipeline = ExportPipelineBuilder::new().with_output_dir(output_dir).build();

    println!("Exporting {} ...", kind);
    match pipeline.export(record, kind).await? {
        ExportOutcome::Saved { path, .. } => {
            println!("Successfully exported {}", path.display());
        }
        ExportOutcome::SkippedInFlight => {
            println!("Record is already being exported.");
        }
    }

    Ok(())
}
