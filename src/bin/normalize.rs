use raster_filters::codec::sgi::{read_sgi, write_sgi};
use raster_filters::filters::{normalize, NormalizeStats};
use raster_filters::report::write_json_file;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let input = args.next().ok_or_else(usage)?;
    let output = args.next().ok_or_else(usage)?;
    let report = args.next().map(PathBuf::from);

    let input = Path::new(&input);
    let output = Path::new(&output);

    let mut image =
        read_sgi(input).map_err(|e| format!("Failed to read {}: {e}", input.display()))?;
    println!(
        "Read {}: {}x{} pixels, {} channels",
        input.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    let stats = normalize(&mut image);
    println!("Sample range before stretch: min={}, max={}", stats.min, stats.max);

    write_sgi(output, &image).map_err(|e| format!("Failed to write {}: {e}", output.display()))?;
    println!("Wrote normalized image to {}", output.display());

    if let Some(report_path) = report {
        let summary = NormalizeSummary {
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            stats,
        };
        write_json_file(&report_path, &summary)?;
        println!("Saved report to {}", report_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: normalize <input.sgi> <output.sgi> [report.json]".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizeSummary {
    width: usize,
    height: usize,
    channels: usize,
    stats: NormalizeStats,
}
