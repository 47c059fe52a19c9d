mod common;

use common::synthetic_image::{flat, ramp};
use raster_filters::codec::{ppm, sgi, CodecError};
use raster_filters::filters::{blur, normalize};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("raster_filters_{}_{name}", std::process::id()))
}

#[test]
fn sgi_file_roundtrip_across_geometries() {
    let _ = env_logger::builder().is_test(true).try_init();

    for &(w, h, c) in &[
        (1usize, 1usize, 1usize),
        (3, 5, 1),
        (2, 1, 3),
        (7, 3, 3),
        (4, 4, 4),
    ] {
        let image = ramp(w, h, c);
        let path = temp_path(&format!("rt_{w}x{h}x{c}.sgi"));

        sgi::write_sgi(&path, &image).expect("write should succeed");
        let back = sgi::read_sgi(&path).expect("read should succeed");
        fs::remove_file(&path).ok();

        assert_eq!(back, image, "file roundtrip mismatch for {w}x{h}x{c}");
    }
}

#[test]
fn ppm_file_roundtrip() {
    let image = ramp(5, 3, 3);
    let path = temp_path("rt.ppm");

    ppm::write_ppm(&path, &image).expect("write should succeed");
    let back = ppm::read_ppm(&path).expect("read should succeed");
    fs::remove_file(&path).ok();

    assert_eq!(back, image);
}

#[test]
fn missing_input_reports_path() {
    let path = temp_path("does_not_exist.sgi");
    match sgi::read_sgi(&path) {
        Err(CodecError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected an open error, got {other:?}"),
    }
}

#[test]
fn text_example_decodes_and_reencodes_identically() {
    let input = b"P3\n2 1\n255\n10 20 30 40 50 60\n";
    let image = ppm::decode(input).unwrap();

    assert_eq!((image.width(), image.height()), (2, 1));
    assert_eq!(
        [image.get(0, 0, 0), image.get(0, 0, 1), image.get(0, 0, 2)],
        [10, 20, 30]
    );
    assert_eq!(
        [image.get(1, 0, 0), image.get(1, 0, 1), image.get(1, 0, 2)],
        [40, 50, 60]
    );

    let mut reencoded = Vec::new();
    ppm::encode(&mut reencoded, &image).unwrap();
    assert_eq!(ppm::decode(&reencoded).unwrap(), image);
}

#[test]
fn normalize_then_blur_pipeline() {
    // Decode -> normalize -> blur -> encode, the tool pipeline end to end.
    let mut image = ramp(9, 7, 3);
    let stats = normalize(&mut image);
    assert_eq!(stats.min, 0);
    assert!(stats.max >= 250, "ramp should nearly fill the byte range");

    let blurred = blur(&image);
    assert_eq!(
        (blurred.width(), blurred.height(), blurred.channels()),
        (9, 7, 3)
    );

    let path = temp_path("pipeline.ppm");
    ppm::write_ppm(&path, &blurred).expect("write should succeed");
    let back = ppm::read_ppm(&path).expect("read should succeed");
    fs::remove_file(&path).ok();
    assert_eq!(back, blurred);
}

#[test]
fn cross_codec_conversion_preserves_samples() {
    // An RGB image written as SGI and re-read decodes to the same
    // interleaved samples a PPM roundtrip produces.
    let image = ramp(6, 4, 3);

    let sgi_path = temp_path("cross.sgi");
    sgi::write_sgi(&sgi_path, &image).expect("sgi write should succeed");
    let from_sgi = sgi::read_sgi(&sgi_path).expect("sgi read should succeed");
    fs::remove_file(&sgi_path).ok();

    let ppm_path = temp_path("cross.ppm");
    ppm::write_ppm(&ppm_path, &from_sgi).expect("ppm write should succeed");
    let from_ppm = ppm::read_ppm(&ppm_path).expect("ppm read should succeed");
    fs::remove_file(&ppm_path).ok();

    assert_eq!(from_ppm, image);
}

#[test]
fn blur_of_flat_field_survives_both_codecs() {
    let image = flat(8, 8, 3, 190);
    let blurred = blur(&image);
    assert_eq!(blurred, image, "flat field must be a blur fixed point");

    let path = temp_path("flat.sgi");
    sgi::write_sgi(&path, &blurred).expect("write should succeed");
    let back = sgi::read_sgi(&path).expect("read should succeed");
    fs::remove_file(&path).ok();
    assert_eq!(back, image);
}
