use raster_filters::codec::ppm::{read_ppm, write_ppm};
use raster_filters::filters::blur;
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

    let image =
        read_ppm(input).map_err(|e| format!("Failed to read {}: {e}", input.display()))?;
    println!(
        "Read {}: {}x{} pixels, {} channels",
        input.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    let blurred = blur(&image);
    write_ppm(output, &blurred)
        .map_err(|e| format!("Failed to write {}: {e}", output.display()))?;
    println!("Wrote blurred image to {}", output.display());

    if let Some(report_path) = report {
        let summary = BlurSummary {
            width: blurred.width(),
            height: blurred.height(),
            channels: blurred.channels(),
        };
        write_json_file(&report_path, &summary)?;
        println!("Saved report to {}", report_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: blur <input.ppm> <output.ppm> [report.json]".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlurSummary {
    width: usize,
    height: usize,
    channels: usize,
}
