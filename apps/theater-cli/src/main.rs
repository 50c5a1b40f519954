//! # Theater Statement Printer
//!
//! Prints one statement per invoice.
//!
//! ## Startup Sequence
//! 1. Load configuration (defaults → theater.toml → env → flags)
//! 2. Initialize tracing (logging to stderr)
//! 3. Load plays.json and invoices.json
//! 4. Validate and summarize every invoice
//! 5. Render and print, only if every invoice succeeded
//!
//! ## Usage
//! ```bash
//! theater-cli
//! theater-cli --format html --locale de-DE
//! theater-cli --plays data/plays.json --invoices data/invoices.json
//! ```

mod loader;
mod settings;

use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use theater_core::validation::validate_invoice;
use theater_core::{summarize, Invoice, PlayCatalog};
use theater_render::{render, CurrencyFormatter, OutputFormat};

use crate::settings::StatementConfig;

const USAGE: &str = "\
Usage: theater-cli [OPTIONS]

Options:
  -p, --plays PATH       Play catalog JSON (default: data/plays.json)
  -i, --invoices PATH    Invoices JSON (default: data/invoices.json)
  -f, --format FORMAT    text | html | json (default: text)
  -l, --locale LOCALE    en-US | de-DE (default: en-US)
  -h, --help             Print this help";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    // No subscriber exists until the config is known, so stderr is the only sink here.
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Statement generation failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Resolves configuration from every source, flags last.
fn load_config(args: &[String]) -> anyhow::Result<StatementConfig> {
    let mut config = StatementConfig::load().context("Failed to load configuration")?;
    config.apply_args(args)?;
    Ok(config)
}

fn run(config: &StatementConfig) -> anyhow::Result<()> {
    info!(
        plays = %config.plays_path.display(),
        invoices = %config.invoices_path.display(),
        format = %config.format,
        locale = %config.locale,
        "Configuration loaded"
    );

    let format = config.output_format()?;
    let currency = config.currency()?;

    let catalog = loader::load_plays(&config.plays_path).context("Failed to load plays")?;
    let invoices =
        loader::load_invoices(&config.invoices_path).context("Failed to load invoices")?;
    info!(plays = catalog.len(), invoices = invoices.len(), "Input loaded");

    let statements = generate_statements(&invoices, &catalog, format, &currency)?;
    for statement in statements {
        print!("{statement}");
        if format == OutputFormat::Json {
            println!();
        }
    }

    Ok(())
}

/// Validates, summarizes and renders every invoice.
///
/// Returns nothing unless every invoice succeeds, so a bad invoice never
/// leaves a partial run on stdout.
fn generate_statements(
    invoices: &[Invoice],
    catalog: &impl PlayCatalog,
    format: OutputFormat,
    currency: &dyn CurrencyFormatter,
) -> anyhow::Result<Vec<String>> {
    invoices
        .iter()
        .map(|invoice| -> anyhow::Result<String> {
            validate_invoice(invoice)
                .with_context(|| format!("Invalid invoice for {}", invoice.customer))?;

            let summary = summarize(invoice, catalog)
                .with_context(|| format!("Cannot produce statement for {}", invoice.customer))?;
            debug!(
                customer = %summary.customer,
                performances = summary.lines.len(),
                total = %summary.total_amount,
                credits = summary.total_credits,
                "Statement computed"
            );

            Ok(render(&summary, format, currency)?)
        })
        .collect()
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout
/// carries only statements.
fn init_tracing(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ConfigError;
    use theater_core::{CoreError, Performance};
    use theater_render::LocaleCurrency;

    fn catalog() -> theater_core::InMemoryCatalog {
        loader::parse_plays(
            r#"{
                "hamlet": { "name": "Hamlet", "type": "tragedy" },
                "as-like": { "name": "As You Like It", "type": "comedy" },
                "aida": { "name": "Aida", "type": "opera" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_statements() {
        let invoices = vec![
            Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]),
            Invoice::new("SmallCo", vec![Performance::new("as-like", 10)]),
        ];
        let statements = generate_statements(
            &invoices,
            &catalog(),
            OutputFormat::Text,
            &LocaleCurrency::en_us(),
        )
        .unwrap();

        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("Statement for BigCo\n"));
        assert!(statements[1].contains("As You Like It: $330.00 (10 seats)"));
    }

    #[test]
    fn test_one_bad_invoice_fails_the_run() {
        let invoices = vec![
            Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]),
            Invoice::new("Opera Lovers", vec![Performance::new("aida", 10)]),
        ];
        let err = generate_statements(
            &invoices,
            &catalog(),
            OutputFormat::Text,
            &LocaleCurrency::en_us(),
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::UnsupportedGenre("opera".to_string()))
        );
        assert!(format!("{err:#}").contains("Opera Lovers"));
    }

    #[test]
    fn test_invalid_invoice_is_rejected_before_pricing() {
        let invoices = vec![Invoice::new("", vec![Performance::new("hamlet", 55)])];
        let err = generate_statements(
            &invoices,
            &catalog(),
            OutputFormat::Text,
            &LocaleCurrency::en_us(),
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("customer is required"));
    }

    #[test]
    fn test_load_config_rejects_bad_flags() {
        let err = load_config(&["--verbose".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownFlag(flag)) if flag == "--verbose"
        ));

        let err = load_config(&["--plays".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingValue(flag)) if flag == "--plays"
        ));
    }
}
