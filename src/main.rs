use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferrite_classify::{data, ExecutionStrategy, Model, PredictConfig, PredictionService};

/// Classifies every row of a CSV feature batch with a pretrained
/// two-layer sigmoid network and prints one label per line.
#[derive(Parser, Debug)]
#[command(name = "ferrite-classify", version, about)]
struct Cli {
    /// Model JSON file holding `w1`, `w2` and optional metadata.
    #[arg(short, long)]
    model: String,

    /// CSV file with one feature row per line (header optional).
    #[arg(short, long)]
    input: String,

    /// Batch scheduling: row-wise, parallel or batched.
    #[arg(short, long, default_value = "batched")]
    strategy: ExecutionStrategy,

    /// Print the label names from the model metadata instead of numbers.
    #[arg(long)]
    names: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ferrite_classify=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let model = Model::load_json(&cli.model)
        .with_context(|| format!("loading model from {}", cli.model))?;
    let batch = data::read_batch(&cli.input)
        .with_context(|| format!("reading batch from {}", cli.input))?;
    info!(
        rows = batch.rows,
        features = model.weights.input_size(),
        labels = model.weights.output_size(),
        "classifying batch"
    );

    let Model { weights, metadata } = model;
    let service = PredictionService::new(weights, PredictConfig::new(cli.strategy));
    let labels = if cli.names {
        service.predict_labels(&batch, &metadata)
    } else {
        service
            .predict(&batch)
            .map(|labels| labels.iter().map(ToString::to_string).collect::<Vec<String>>())
    }
    .context("prediction failed")?;

    for label in labels {
        println!("{label}");
    }
    Ok(())
}
