//! File-backed tests for catalog and settings loading.

use std::fs;

use fp1_ingest::{IngestError, load_settings, read_catalog};

const HEADER: &str = "Name,Film Simulation,Grain,CCFx,White Balance,R,B,DR,Highlight,Shadow,Color,Sharpness,NR,Exposure";

#[test]
fn reads_catalog_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("recipes.csv");
    let contents = format!(
        "{HEADER}\nLabel1,ASTIA,STRONG,B&W/BLUE,Auto,1,-1,DR200,1,0,0,2,1,0\n\
         \"Portra, 400\",PRO Neg. Std,WEAK,OFF/STRONG,5200K,2,-4,DR400,-1,-2,2,-2,-4,+2/3\n"
    );
    fs::write(&path, contents).expect("write catalog");

    let recipes = read_catalog(&path).expect("read catalog");
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].label, "Label1");
    assert_eq!(recipes[0].chrome_effect, "B&W");
    assert_eq!(recipes[0].chrome_effect_blue, "BLUE");
    assert_eq!(recipes[1].label, "Portra, 400");
    assert_eq!(recipes[1].chrome_effect, "OFF");
    assert_eq!(recipes[1].chrome_effect_blue, "STRONG");
    assert_eq!(recipes[1].exposure_bias, "+2/3");
}

#[test]
fn missing_catalog_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_catalog(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}

#[test]
fn loads_settings_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.yaml");
    fs::write(
        &path,
        "camera:\n  model: X-Pro3\n  firmware: 1.21.0.0\n  serialNb: 42\nxrfc:\n  version: 1.12.0.0\nfp1Path: out\n",
    )
    .expect("write settings");

    let settings = load_settings(&path).expect("load settings");
    assert_eq!(settings.model(), "X-Pro3");
    assert_eq!(settings.serial_number(), 42);
    assert_eq!(settings.application_version(), "1.12.0.0");
}

#[test]
fn missing_settings_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_settings(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}
