use raster_filters::codec::ppm::{read_ppm, write_ppm};
use raster_filters::codec::sgi::{read_sgi, write_sgi};
use raster_filters::report::write_json_file;
use raster_filters::RasterImage;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Format {
    Sgi,
    Ppm,
}

fn detect_format(path: &Path) -> Result<Format, String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("sgi") | Some("rgb") | Some("bw") => Ok(Format::Sgi),
        Some("ppm") => Ok(Format::Ppm),
        _ => Err(format!(
            "Cannot infer image format of {} (expected .sgi/.rgb/.bw or .ppm)",
            path.display()
        )),
    }
}

fn read_image(path: &Path, format: Format) -> Result<RasterImage, String> {
    let result = match format {
        Format::Sgi => read_sgi(path),
        Format::Ppm => read_ppm(path),
    };
    result.map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

fn write_image(path: &Path, format: Format, image: &RasterImage) -> Result<(), String> {
    let result = match format {
        Format::Sgi => write_sgi(path, image),
        Format::Ppm => write_ppm(path, image),
    };
    result.map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let input = args.next().ok_or_else(usage)?;
    let output = args.next().ok_or_else(usage)?;
    let report = args.next().map(PathBuf::from);

    let input = Path::new(&input);
    let output = Path::new(&output);

    let from = detect_format(input)?;
    let to = detect_format(output)?;

    let image = read_image(input, from)?;
    println!(
        "Read {}: {}x{} pixels, {} channels",
        input.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    write_image(output, to, &image)?;
    println!("Wrote {} as {:?}", output.display(), to);

    if let Some(report_path) = report {
        let summary = ConvertSummary {
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            from,
            to,
        };
        write_json_file(&report_path, &summary)?;
        println!("Saved report to {}", report_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: convert <input.{sgi,ppm}> <output.{sgi,ppm}> [report.json]".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertSummary {
    width: usize,
    height: usize,
    channels: usize,
    from: Format,
    to: Format,
}
