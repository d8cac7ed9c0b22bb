mod common;

use std::process::{Command, Output};

use tempfile::TempDir;

use common::{write_image, write_text};

fn ocrmd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ocrmd"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ocrmd binary")
}

fn ocrmd_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ocrmd"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ocrmd binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let output = ocrmd(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("使用方法: ocrmd <画像フォルダのパス>"));
}

#[test]
fn test_two_arguments_prints_usage_and_exits_1() {
    let output = ocrmd(&["one", "two"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("使用方法:"));
}

#[test]
fn test_missing_folder_reports_error_and_exits_0() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let output = ocrmd(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("エラーが発生しました: Directory not found"), "{out}");
    assert!(out.contains("missing"), "{out}");
}

#[test]
fn test_folder_without_images_creates_nothing() {
    let dir = TempDir::new().unwrap();
    write_text(dir.path(), "readme.txt", "hello");

    let output = ocrmd(&[dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("画像ファイルが見つかりませんでした。"));
    assert!(!dir.path().join(ocrmd::OUTPUT_FILE_NAME).exists());
}

#[test]
fn test_help_exits_0() {
    let output = ocrmd(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("ocrmd"));
}

#[test]
fn test_hyphen_prefixed_folder_is_treated_as_folder() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("-scans");
    std::fs::create_dir(&folder).unwrap();
    write_text(&folder, "readme.txt", "hello");

    let output = ocrmd_in(dir.path(), &["-scans"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("画像ファイルが見つかりませんでした。"), "{out}");
    assert!(!out.contains("使用方法:"), "{out}");
}

#[test]
fn test_missing_hyphen_prefixed_folder_reports_not_found() {
    let dir = TempDir::new().unwrap();

    let output = ocrmd_in(dir.path(), &["-x"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("エラーが発生しました: Directory not found"));
}

#[test]
fn test_unwritable_report_reports_error_and_exits_0() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "a.png");
    std::fs::create_dir(dir.path().join(ocrmd::OUTPUT_FILE_NAME)).unwrap();

    let output = ocrmd(&[dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("処理中: a.png"), "{out}");
    assert!(out.contains("エラーが発生しました: Failed to write report"), "{out}");
    assert!(!out.contains("OCR結果を保存しました"), "{out}");
}
