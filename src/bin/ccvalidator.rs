//! CLI tool for card validation.
//!
//! # Usage
//!
//! ```bash
//! # Classify a card number
//! ccvalidator details 4111111111111111 --output json
//!
//! # Validate a card number
//! ccvalidator validate "4111 1111 1111 1111"
//!
//! # Validate a CVV for a card
//! ccvalidator cvv 378282246310005 1234
//!
//! # Validate an expiry against a fixed baseline
//! ccvalidator expiry 4111111111111111 06/2026 --month 6 --year 2025
//!
//! # List the brand rule table
//! ccvalidator brands
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `warn`); logs go to
//! stderr.

use card_validator::{brand_rules, format, mask, passes_luhn, CardValidator, ValidationError};
use clap::{Parser, Subcommand, ValueEnum};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccvalidator")]
#[command(author, version, about = "Payment card classification and validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a card number and print the full result
    Details {
        /// Card number (spaces and dashes allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a card number (Luhn and brand length)
    Validate {
        /// Card number (spaces and dashes allowed)
        card_number: String,
    },

    /// Validate a CVV/CVC for a card number
    Cvv {
        /// Card number the CVV belongs to
        card_number: String,

        /// CVV to validate (may be empty for Maestro)
        #[arg(default_value = "")]
        cvv: String,
    },

    /// Validate an MM/YYYY expiry date for a card number
    Expiry {
        /// Card number the expiry belongs to
        card_number: String,

        /// Expiry date (MM/YYYY)
        date: String,

        /// Baseline month (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Baseline year (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Format a card number using its brand's grouping
    Format {
        /// Card number to format
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Mask a card number, keeping the last four digits
    Mask {
        /// Card number to mask
        card_number: String,
    },

    /// List supported brands in detection order
    Brands {
        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Details {
            card_number,
            output,
        } => {
            cmd_details(card_number, output);
        }
        Commands::Validate { card_number } => {
            cmd_validate(card_number);
        }
        Commands::Cvv { card_number, cvv } => {
            cmd_cvv(card_number, &cvv);
        }
        Commands::Expiry {
            card_number,
            date,
            month,
            year,
        } => {
            cmd_expiry(card_number, &date, month, year);
        }
        Commands::Luhn { card_number } => {
            cmd_luhn(&card_number);
        }
        Commands::Format {
            card_number,
            separator,
        } => {
            println!("{}", format::format_with_separator(&card_number, &separator));
        }
        Commands::Mask { card_number } => {
            println!("{}", mask::mask_string(&card_number));
        }
        Commands::Brands { output } => {
            cmd_brands(output);
        }
    }
}

fn fail(e: ValidationError) -> ! {
    println!("Valid: no");
    println!("Error: {}", e);
    process::exit(2);
}

fn exit_with(valid: bool) -> ! {
    println!("Valid: {}", if valid { "yes" } else { "no" });
    process::exit(if valid { 0 } else { 1 });
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn cmd_details(card_number: String, output: OutputFormat) {
    let mut validator = CardValidator::new(card_number);
    let details = match validator.get_card_details() {
        Ok(details) => details,
        Err(e) => match output {
            OutputFormat::Text => fail(e),
            OutputFormat::Json => {
                print_json(&serde_json::json!({ "error": e.to_string() }));
                process::exit(2);
            }
        },
    };

    match output {
        OutputFormat::Text => {
            println!("Card Type: {}", details.card_type());
            println!("Masked: {}", validator.masked());
            println!("Luhn Valid: {}", details.luhn_valid);
            println!("Length Valid: {}", details.length_valid);
            println!("Supported Lengths: {:?}", details.supported_lengths);
            println!("CVV Lengths: {:?}", details.cvv_length);
            println!("Valid: {}", if details.valid { "yes" } else { "no" });
        }
        OutputFormat::Json => print_json(&details),
    }

    process::exit(if details.valid { 0 } else { 1 });
}

fn cmd_validate(card_number: String) {
    let mut validator = CardValidator::new(card_number);
    match validator.validate_card() {
        Ok(valid) => exit_with(valid),
        Err(e) => fail(e),
    }
}

fn cmd_cvv(card_number: String, cvv: &str) {
    let mut validator = CardValidator::new(card_number);
    match validator.validate_cvv(cvv) {
        Ok(valid) => {
            if let Some(brand) = validator.brand() {
                println!("Brand: {}", brand.name());
            }
            exit_with(valid)
        }
        Err(e) => fail(e),
    }
}

fn cmd_expiry(card_number: String, date: &str, month: Option<String>, year: Option<String>) {
    let mut validator = CardValidator::new(card_number);

    if month.is_some() || year.is_some() {
        let month = month.unwrap_or_default();
        let year = year.unwrap_or_default();
        if let Err(e) = validator.set_baseline_str(&month, &year) {
            fail(e);
        }
    }

    match validator.validate_expiry(date) {
        Ok(valid) => {
            if let Some(base) = validator.baseline() {
                println!("Baseline: {}", base);
            }
            exit_with(valid)
        }
        Err(e) => fail(e),
    }
}

fn cmd_luhn(card_number: &str) {
    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        process::exit(1);
    }
}

fn cmd_brands(output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            for rule in brand_rules() {
                println!(
                    "{:<28} lengths {:?}  cvv {:?}",
                    rule.brand.name(),
                    rule.valid_length,
                    rule.cvv_length
                );
            }
        }
        OutputFormat::Json => {
            let brands: Vec<_> = brand_rules()
                .iter()
                .map(|rule| {
                    serde_json::json!({
                        "card_type": rule.brand,
                        "name": rule.brand.name(),
                        "valid_length": rule.valid_length,
                        "cvv_length": rule.cvv_length,
                        "gaps": rule.gaps,
                    })
                })
                .collect();
            print_json(&brands);
        }
    }
}
