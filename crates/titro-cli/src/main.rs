mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "titro",
    version,
    about = "Chemical calculation toolkit for cleaning-product quality control"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample concentration by direct titration (C1V1 = C2V2)
    Titration {
        /// Titrant volume (mL)
        #[arg(short = 't', long)]
        titrant_volume: f64,

        /// Titrant concentration (mol/L)
        #[arg(short = 'c', long)]
        titrant_conc: f64,

        /// Sample volume (mL)
        #[arg(short = 's', long)]
        sample_volume: f64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Active chlorine concentration by thiosulfate titration
    Chlorine {
        /// Thiosulfate volume (mL)
        #[arg(short = 't', long)]
        thio_volume: f64,

        /// Thiosulfate normality (N)
        #[arg(short = 'n', long)]
        normality: f64,

        /// Sample volume (mL)
        #[arg(short = 's', long)]
        sample_volume: f64,

        /// Assess against a product's expected range (key from `titro products list`)
        #[arg(short, long)]
        product: Option<String>,

        /// Custom product table JSON file (default: builtin table)
        #[arg(long = "products", value_name = "FILE")]
        products_file: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Hydrogen peroxide concentration by permanganate titration
    Peroxide {
        /// Permanganate volume (mL)
        #[arg(short = 't', long)]
        perm_volume: f64,

        /// Permanganate normality (N)
        #[arg(short = 'n', long)]
        normality: f64,

        /// Sample volume (mL)
        #[arg(short = 's', long)]
        sample_volume: f64,

        /// Assess against a product's expected range (key from `titro products list`)
        #[arg(short, long)]
        product: Option<String>,

        /// Custom product table JSON file (default: builtin table)
        #[arg(long = "products", value_name = "FILE")]
        products_file: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Mass balance over a process (inlet minus outlet)
    MassBalance {
        /// Inlet mass (kg)
        #[arg(short = 'i', long)]
        mass_in: f64,

        /// Outlet mass (kg)
        #[arg(short = 'u', long)]
        mass_out: f64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Limiting-reagent balance for a reaction
    React {
        /// Reaction kind: neutralization, chlorine_bleach, peroxide_synthesis
        reaction: String,

        /// Mass of the first reagent (kg)
        #[arg(short = '1', long)]
        mass1: f64,

        /// Mass of the second reagent (kg)
        #[arg(short = '2', long)]
        mass2: f64,

        /// Display unit: kg (default), l, ml
        #[arg(long, default_value = "kg")]
        unit: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect product reference tables
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products in the builtin reference table
    List,
    /// Explain a product's expected range and titration method
    Explain {
        /// Product key (e.g., "chlorine-bleach")
        key: String,
    },
    /// Validate a custom product table file
    Validate {
        /// Path to JSON product table
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Titration {
            titrant_volume,
            titrant_conc,
            sample_volume,
            output,
        } => commands::titration::run(titrant_volume, titrant_conc, sample_volume, &output),
        Commands::Chlorine {
            thio_volume,
            normality,
            sample_volume,
            product,
            products_file,
            output,
        } => commands::chlorine::run(
            thio_volume,
            normality,
            sample_volume,
            product.as_deref(),
            products_file,
            &output,
        ),
        Commands::Peroxide {
            perm_volume,
            normality,
            sample_volume,
            product,
            products_file,
            output,
        } => commands::peroxide::run(
            perm_volume,
            normality,
            sample_volume,
            product.as_deref(),
            products_file,
            &output,
        ),
        Commands::MassBalance {
            mass_in,
            mass_out,
            output,
        } => commands::mass_balance::run(mass_in, mass_out, &output),
        Commands::React {
            reaction,
            mass1,
            mass2,
            unit,
            output,
        } => commands::react::run(&reaction, mass1, mass2, &unit, &output),
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(),
            ProductsAction::Explain { key } => commands::products::explain(&key),
            ProductsAction::Validate { file } => commands::products::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
