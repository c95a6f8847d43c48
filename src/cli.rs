use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_IMAGE_URL_TEMPLATE: &str =
    "https://iiif.itatti.harvard.edu/iiif/2/digiteca!{id}_{side}.jpg/full/full/0/default.jpg";

#[derive(Parser, Debug)]
#[command(
    name = "digiteca-eval",
    version,
    about = "Field-level accuracy evaluation for structured catalog-card extraction"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Analyze(AnalyzeArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(long, default_value = "ground_truth/output")]
    pub ground_truth_dir: PathBuf,

    #[arg(long, default_value = "benchmark_data")]
    pub benchmark_dir: PathBuf,

    #[arg(long, default_value = "analysis.json")]
    pub output_path: PathBuf,

    #[arg(
        long = "candidate",
        default_values_t = default_candidates()
    )]
    pub candidates: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub strict_unknown_fields: bool,

    #[arg(long, default_value = DEFAULT_IMAGE_URL_TEMPLATE)]
    pub image_url_template: String,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = "ground_truth/output")]
    pub ground_truth_dir: PathBuf,

    #[arg(long, default_value = "benchmark_data")]
    pub benchmark_dir: PathBuf,

    #[arg(
        long = "candidate",
        default_values_t = default_candidates()
    )]
    pub candidates: Vec<String>,
}

fn default_candidates() -> Vec<String> {
    ["gpt-4o", "o1", "gpt-4o-mini", "claude3.5"]
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}
