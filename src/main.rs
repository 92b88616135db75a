use anyhow::{Context, Result};
use clap::Parser;

use level_scope::data::{PriceHistorySource, fetch_history_with_fallback, normalize_symbol};
use level_scope::summary::render_summary;
use level_scope::{Cli, JsonFileSource, analyze};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Load history
    let symbol = normalize_symbol(&args.symbol)?;
    let sources: Vec<Box<dyn PriceHistorySource>> =
        vec![Box::new(JsonFileSource::new(&args.data_dir))];
    let (history, _signature) = fetch_history_with_fallback(&sources, &symbol, args.period)?;

    // D. Analyse
    let report = analyze(&history.series, &args.analysis_params())
        .with_context(|| format!("Failed to analyse {}", symbol))?;

    // E. Present
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_summary(&history, &report));
    }
    Ok(())
}
