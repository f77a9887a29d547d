/*!
huemix Command Line Interface

Blends hex colors by weight from the command line and looks up display
names for known colors.
*/

use clap::{Parser, Subcommand};
use serde::Serialize;

use huemix::color::Rgb;
use huemix::{mix, names, MixStrategy, VERSION};

#[derive(Parser)]
#[command(name = "huemix")]
#[command(about = "Weighted color mixing for the command line")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Blend colors by weight into a single hex color
    Mix {
        /// Colors to blend, as strict #RRGGBB literals
        #[arg(required = true)]
        colors: Vec<String>,

        /// Weight paired with each color by position, comma separated
        #[arg(long, short, value_delimiter = ',', required = true)]
        weights: Vec<f64>,

        /// Blending strategy (weighted-average, sequential-subtractive)
        #[arg(long, default_value = "weighted-average")]
        strategy: String,

        /// Output format (hex, json, pretty)
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// Look up the display name of a color
    Name {
        /// The #RRGGBB color to name
        color: String,
    },
}

/// Mix result as printed by `--format json`.
#[derive(Serialize)]
struct MixReport {
    strategy: &'static str,
    color: String,
    name: &'static str,
    total_weight: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mix {
            colors,
            weights,
            strategy,
            format,
        } => {
            let strategy = match MixStrategy::from_name(&strategy) {
                Some(strategy) => strategy,
                None => {
                    eprintln!("Unknown strategy: {}", strategy);
                    eprintln!("Available strategies: weighted-average, sequential-subtractive");
                    std::process::exit(1);
                }
            };

            let color_refs: Vec<&str> = colors.iter().map(String::as_str).collect();
            let mixed = strategy.mix(&color_refs, &weights);
            let report = MixReport {
                strategy: strategy.name(),
                name: names::color_name(&mixed),
                total_weight: mix::total_weight(&weights),
                color: mixed,
            };

            match format.as_str() {
                "hex" => println!("{}", report.color),
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                "pretty" => {
                    println!("Strategy: {}", report.strategy);
                    println!("Mixed color: {}", report.color);
                    println!("Name: {}", report.name);
                    println!("Total mixture weight: {:.1}", report.total_weight);
                }
                _ => {
                    eprintln!("Unknown format: {}", format);
                    std::process::exit(1);
                }
            }
        }

        Commands::Name { color } => match Rgb::from_hex(&color) {
            Ok(_) => println!("{}", names::color_name(&color)),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
