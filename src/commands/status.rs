use anyhow::Result;
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::store::DocumentStore;

pub fn run(args: StatusArgs) -> Result<()> {
    let store = DocumentStore::new(&args.ground_truth_dir, &args.benchmark_dir);

    info!(
        ground_truth_dir = %args.ground_truth_dir.display(),
        benchmark_dir = %args.benchmark_dir.display(),
        "status requested"
    );

    let image_ids = store.list_image_ids()?;
    info!(image_count = image_ids.len(), "ground truth inventory");

    for candidate in &args.candidates {
        let mut present = 0_usize;
        let mut missing_ids = Vec::new();

        for image_id in &image_ids {
            if store.candidate_path(candidate, image_id).exists() {
                present += 1;
            } else {
                missing_ids.push(image_id.clone());
            }
        }

        if missing_ids.is_empty() {
            info!(
                candidate = %candidate,
                present,
                total = image_ids.len(),
                "candidate coverage complete"
            );
        } else {
            warn!(
                candidate = %candidate,
                present,
                total = image_ids.len(),
                missing = %missing_ids.join(", "),
                "candidate coverage incomplete"
            );
        }
    }

    let benchmark = store.load_benchmark_summary()?;
    if benchmark.is_empty() {
        warn!("benchmark summary missing, report will carry no cost or timing figures");
    } else {
        info!(
            candidate_count = benchmark.len(),
            "benchmark summary available"
        );
    }

    Ok(())
}
