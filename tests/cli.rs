use std::fs;
use std::path::Path;
use std::process::Command;

use favicongen::{favicon, og};

const APP_PATH: &str = env!("CARGO_BIN_EXE_favicongen");
const ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn png_size(path: &Path) -> (u32, u32) {
    let data = fs::read(path).unwrap();
    let decoder = png::Decoder::new(data.as_slice());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn default_run_generates_the_favicon_set() {
    let root = Path::new(ROOT);

    let output = Command::new(APP_PATH).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut last_pos = 0;
    for size in favicon::SIZES {
        let notice = format!("Generated favicon-{}.png", size);
        let pos = stdout.find(&notice).unwrap_or_else(|| {
            panic!("missing notice for favicon-{}.png in {:?}", size, stdout)
        });
        assert!(pos >= last_pos, "notices out of order in {:?}", stdout);
        last_pos = pos;

        assert_eq!(png_size(&favicon::output_path(root, size)), (size, size));
    }
    assert!(stdout.contains("All favicons generated"));

    // A second run must overwrite every file with identical bytes.
    let first: Vec<Vec<u8>> = favicon::SIZES
        .iter()
        .map(|&size| fs::read(favicon::output_path(root, size)).unwrap())
        .collect();

    let output = Command::new(APP_PATH).output().unwrap();
    assert!(output.status.success());

    for (i, &size) in favicon::SIZES.iter().enumerate() {
        let second = fs::read(favicon::output_path(root, size)).unwrap();
        assert_eq!(first[i], second, "favicon-{}.png changed between runs", size);
    }
}

#[test]
fn og_run_generates_the_card() {
    let output = Command::new(APP_PATH).arg("--og").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Generated eduproof-og.png"));

    let path = Path::new(ROOT).join(og::CARD_PNG_PATH);
    assert_eq!(png_size(&path), (1200, 630));
}

#[test]
fn help_and_version() {
    let output = Command::new(APP_PATH).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("USAGE"));

    let output = Command::new(APP_PATH).arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn unexpected_arguments_fail() {
    let output = Command::new(APP_PATH).arg("extra.svg").output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unexpected arguments"));
}
