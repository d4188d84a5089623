use cerviscan::config::{load_config, ScreeningConfig};
use cerviscan::image::io::{load_rgb_image, save_gray_u8, save_rgb_u8, write_json_file};
use cerviscan::{Classifier, LinearClassifier, PipelineError, ScreeningRecord, Screener};
use std::env;
use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| PipelineError::Config(usage()))?;
    let config: ScreeningConfig = load_config(Path::new(&config_path))?;
    let params = config.resolve()?;

    let classifier: Arc<dyn Classifier> = Arc::new(LinearClassifier::load(&config.model)?);
    let screener = Screener::new(params, classifier);

    let rgb = load_rgb_image(&config.input)?;
    let report = screener.process_with_diagnostics(&rgb)?;

    let paths = config.output.artifact_paths(&config.input);
    save_gray_u8(&report.artifacts.gray, &paths.gray)?;
    save_gray_u8(&report.artifacts.mask_preview, &paths.mask)?;
    save_rgb_u8(&report.artifacts.segmented, &paths.segmented)?;

    let processed_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let record = ScreeningRecord::new(&report, paths, processed_at);
    let record_path = config.output.record_path(&config.input);
    write_json_file(&record_path, &record)?;

    for (name, value) in report.outcome.features.iter() {
        println!("{name} : {value}");
    }
    println!(
        "prediction={} thresholds={:?} features={} latency_ms={:.3}",
        report.outcome.label,
        report.outcome.thresholds,
        report.outcome.features.len(),
        report.timings.total_ms
    );
    println!("Saved record to {}", record_path.display());
    Ok(())
}

fn usage() -> String {
    "Usage: cerviscan <config.json>".to_string()
}
