use clap::{Parser, Subcommand};
use image::ImageReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dysgraph::{dataset, Detector};

#[derive(Parser)]
#[command(name = "dysgraph")]
#[command(about = "Screen scanned handwriting for dysgraphia indicators")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a detector from a dataset manifest and save its artifacts
    Train {
        /// CSV manifest with an "Image Path" column
        #[arg(long, value_name = "CSV")]
        manifest: PathBuf,

        /// Output path for the classifier artifact
        #[arg(long, value_name = "PATH", default_value = "dysgraph_model.json")]
        model: PathBuf,

        /// Output path for the scaler artifact
        #[arg(long, value_name = "PATH", default_value = "dysgraph_scaler.json")]
        scaler: PathBuf,
    },

    /// Classify one handwriting image with a previously trained detector
    Predict {
        /// Path to input image file
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Path to the classifier artifact
        #[arg(long, value_name = "PATH", default_value = "dysgraph_model.json")]
        model: PathBuf,

        /// Path to the scaler artifact
        #[arg(long, value_name = "PATH", default_value = "dysgraph_scaler.json")]
        scaler: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let filter = if args.verbose {
        "dysgraph=debug"
    } else {
        "dysgraph=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match args.command {
        Command::Train {
            manifest,
            model,
            scaler,
        } => {
            let (features, labels) = dataset::load_dataset(&manifest)?;
            let pd_count = labels.iter().filter(|&&l| l == 1).count();
            println!(
                "Loaded {} samples ({} PD, {} LPD)",
                labels.len(),
                pd_count,
                labels.len() - pd_count
            );

            let mut detector = Detector::new();
            detector.train(&features, &labels)?;
            detector.save(&model, &scaler)?;

            println!("Model saved to {:?}", model);
            println!("Scaler saved to {:?}", scaler);
        }

        Command::Predict {
            image_path,
            model,
            scaler,
        } => {
            let img = ImageReader::open(&image_path)?
                .decode()
                .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

            let detector = Detector::load(&model, &scaler)?;
            let prediction = detector.predict(&img)?;

            println!("Prediction: {}", prediction.verdict());
            println!("Probability: {:.2}%", prediction.probability * 100.0);
        }
    }

    Ok(())
}
