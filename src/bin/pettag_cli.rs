//! Pet Tag CLI - scripted access to the configurator core
//!
//! Commands: catalog, resolve, cart
//! Outputs JSON to stdout, logs to stderr
//! Returns non-zero when an add is rejected

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pettag_core::{
    preview::display_image,
    tables, Catalog, Color, DirAssetStore, Pattern, Selection, Session, Shape, Size,
    StorefrontConfig,
};

#[derive(Parser)]
#[command(name = "pettag-cli")]
#[command(about = "Pet Tag CLI - option catalog, pricing and cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to storefront config (defaults apply if absent)
    #[arg(short, long, default_value = "storefront.json")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List every option with its label and derived attributes
    Catalog,

    /// Resolve the preview for one design
    Resolve {
        #[arg(long, default_value = "bone")]
        shape: Shape,
        #[arg(long, default_value = "pink")]
        color: Color,
        #[arg(long, default_value = "dots")]
        pattern: Pattern,
        #[arg(long, default_value = "m")]
        size: Size,
        #[arg(long, default_value = "")]
        text: String,

        /// Directory holding img/; reports whether the asset exists
        #[arg(long)]
        assets_root: Option<PathBuf>,
    },

    /// Add designs to a fresh cart and print the result
    Cart {
        /// JSON array of selections
        #[arg(short, long)]
        payload: String,
    },
}

#[derive(Serialize)]
struct Rejection {
    index: usize,
    error: String,
}

/// Failure report; the message is escaped by serde_json, never pasted in.
fn error_output(context: &str, error: impl Display) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "error": format!("{}: {}", context, error),
    })
}

fn print_json(value: &impl Serialize) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            true
        }
        Err(e) => {
            eprintln!("{}", error_output("Failed to encode output", e));
            false
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match StorefrontConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", error_output("Failed to load config", e));
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Catalog => {
            let catalog = Catalog::new();
            let output = serde_json::json!({
                "shapes": catalog.shapes,
                "colors": catalog.colors.iter().map(|o| serde_json::json!({
                    "value": o.value,
                    "label": o.label,
                    "swatch": tables::swatch(o.value),
                })).collect::<Vec<_>>(),
                "patterns": catalog.patterns,
                "sizes": catalog.sizes.iter().map(|o| serde_json::json!({
                    "value": o.value,
                    "label": o.label,
                    "price": tables::unit_price(o.value),
                    "scale": tables::scale(o.value),
                })).collect::<Vec<_>>(),
            });
            if print_json(&output) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }

        Commands::Resolve { shape, color, pattern, size, text, assets_root } => {
            let mut session = Session::new(config);
            session.replace_selection(Selection::new(shape, color, pattern, size, text));

            let image = assets_root.map(|root| {
                display_image(session.selection(), &DirAssetStore::new(root), session.config())
            });
            let output = serde_json::json!({
                "selection": session.selection(),
                "preview": session.preview(),
                "image": image,
            });
            if print_json(&output) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }

        Commands::Cart { payload } => {
            let selections: Vec<Selection> = match serde_json::from_str(&payload) {
                Ok(s) => s,
                Err(e) => {
                    print_json(&error_output("Invalid payload", e));
                    return ExitCode::FAILURE;
                }
            };

            let mut session = Session::new(config);
            let mut rejected = vec![];
            for (index, selection) in selections.into_iter().enumerate() {
                session.replace_selection(selection);
                if let Err(e) = session.add_to_cart() {
                    rejected.push(Rejection { index, error: e.to_string() });
                }
            }

            let success = rejected.is_empty();
            let output = serde_json::json!({
                "success": success,
                "session": session.id(),
                "cart": session.summary(),
                "rejected": rejected,
            });
            if !print_json(&output) {
                ExitCode::FAILURE
            } else if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Guard rejected at least one design
            }
        }
    }
}
