mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cladquote",
    version,
    about = "Parse siding measurement reports and build priced estimates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a measurement report PDF into structured data (without quoting)
    Parse {
        /// Path to the report PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed measurements to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Calculate a quote from a report PDF (or pre-parsed measurements JSON)
    Quote {
        /// Path to the report PDF or a measurements JSON file
        input_file: PathBuf,

        /// Siding product key (see `catalog list`)
        #[arg(short, long)]
        product: Option<String>,

        /// Material waste percentage (14, 16, or 18)
        #[arg(short, long)]
        waste: Option<u32>,

        /// Custom price catalog JSON file
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// JSON file with full quote selections/overrides
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show every line item, not just package subtotals
        #[arg(long)]
        show_items: bool,
    },
    /// Inspect and validate price catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, profiles, and waste options from the builtin catalog
    List,
    /// Print every price section of a catalog
    Explain {
        /// Custom catalog JSON file (default: builtin)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Print the catalog JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to the catalog JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Quote {
            input_file,
            product,
            waste,
            catalog,
            input,
            output,
            show_items,
        } => commands::quote::run(input_file, product, waste, catalog, input, &output, show_items),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain { catalog } => commands::catalog::explain(catalog),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
