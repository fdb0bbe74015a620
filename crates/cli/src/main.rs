use clap::{Parser, Subcommand};
use rsg_core::{ReportGenerator, RiskTier, ScreeningMeasurement};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rsg")]
#[command(about = "RSG screening report CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report from a measurement document
    Generate {
        /// Path to the measurement JSON file
        measurement: PathBuf,
    },
    /// Classify a raw cardiovascular risk score
    Classify {
        /// Risk score in [0.0, 1.0]
        score: f64,
    },
    /// Print a template measurement document
    Sample,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { measurement }) => {
            let contents = fs::read_to_string(&measurement)?;
            let measurement: ScreeningMeasurement = serde_json::from_str(&contents)?;
            let generator = ReportGenerator::new();
            match generator.generate(&measurement) {
                Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
                Err(e) => eprintln!("Error generating report: {}", e),
            }
        }
        Some(Commands::Classify { score }) => match RiskTier::classify(score) {
            Ok(tier) => println!(
                "Risk level: {}, urgency: {}, follow-up in {} days",
                tier.as_str(),
                tier.urgency().as_str(),
                tier.followup_days()
            ),
            Err(e) => eprintln!("Error classifying score: {}", e),
        },
        Some(Commands::Sample) => {
            let sample = ScreeningMeasurement::new("P001", 0.75, 88, 97.5, 36.8, 145.0)?;
            println!("{}", serde_json::to_string_pretty(&sample)?);
        }
        None => {
            println!("Use 'rsg --help' for commands");
        }
    }

    Ok(())
}
