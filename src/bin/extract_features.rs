use cerviscan::image::io::write_json_file;
use cerviscan::{FeatureAssembler, PipelineError};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let mut args = env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| PipelineError::Config(usage()))?;
    let output = args.next().map(PathBuf::from);

    let features = FeatureAssembler::default().assemble_path(&input)?;

    match output {
        Some(path) => {
            write_json_file(&path, &features)?;
            println!(
                "Saved {} features of {} to {}",
                features.len(),
                input.display(),
                path.display()
            );
        }
        None => {
            for (name, value) in features.iter() {
                println!("{name} : {value}");
            }
        }
    }
    Ok(())
}

fn usage() -> String {
    "Usage: extract_features <image> [out.json]".to_string()
}
