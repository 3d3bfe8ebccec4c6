use anyhow::Result;
use manual_ingest_config::Config;
use manual_ingest_engine::{IoError, ManualStore, Upsert, io, parse_manual};
use std::{env, path::PathBuf, process};

const EXTRACT_FLAG: &str = "--extract";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("manual-ingest", String::as_str);

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let extract = args.iter().skip(1).any(|arg| arg == EXTRACT_FLAG);
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| *arg != EXTRACT_FLAG)
        .collect();

    let source_path = match positional.as_slice() {
        [] => config.source_path.clone(),
        [path] => PathBuf::from(path),
        _ => {
            eprintln!("Usage: {program} [{EXTRACT_FLAG}] [exported-manual.md]");
            process::exit(1);
        }
    };

    if extract {
        let archive_dir = match source_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        match io::extract_export(&archive_dir, &source_path) {
            Ok(_) => {}
            Err(e @ IoError::Io(_)) => return Err(e.into()),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }

    log::info!("Processing file: {}", source_path.display());
    let text = match io::read_source(&source_path) {
        Ok(text) => text,
        Err(e @ IoError::NotFound(_)) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} [{EXTRACT_FLAG}] [exported-manual.md]");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let manual = match parse_manual(&text, &config.overrides()) {
        Ok(manual) => manual,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut store = ManualStore::load(&config.store_path);
    match store.upsert(&manual)? {
        Upsert::Replaced(_) => log::info!("Updating existing manual: {}", manual.id),
        Upsert::Appended(_) => log::info!("Appending new manual: {}", manual.id),
    }
    store.save(&config.store_path)?;

    println!("Done.");
    Ok(())
}
