use clap::Parser;
use clause_extract::domain::ports::Pipeline;
use clause_extract::utils::{logger, validation::Validate};
use clause_extract::{ClassifyEngine, CliConfig, LocalStorage, SimplePipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting clause-extract CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    // The catalog is built once, up front; a malformed rule is fatal here,
    // before any document is touched.
    let catalog = match clause_extract::load_catalog(config.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load pattern catalog: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };
    tracing::info!("Pattern catalog loaded with {} categories", catalog.len());

    let show_text = config.show_text;
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = SimplePipeline::new(storage, config, catalog);
    let engine = ClassifyEngine::new(pipeline);

    if show_text {
        // Peek at the extracted text before the full run, mirroring the
        // review UI's debug toggle.
        match engine.pipeline().extract() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("Clause extraction completed successfully");
            println!("Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Clause extraction failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                clause_extract::utils::error::ErrorSeverity::Low => 0,
                clause_extract::utils::error::ErrorSeverity::Medium => 2,
                clause_extract::utils::error::ErrorSeverity::High => 1,
                clause_extract::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
