use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("intravox-demo"));
    cmd.env_remove("INTRAVOX_DEMO_CONFIG_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn generate_writes_tree_and_prints_summary() {
    let dir = TempDir::new().expect("temp dir");

    cli()
        .arg("generate")
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Generated 16 pages"))
        .stdout(contains("documentation/faq/faq.json"));

    let en = dir.path().join("en");
    assert!(en.join("home.json").is_file());
    assert!(en.join("support/📷 images/.nomedia").is_file());
}

#[test]
fn language_flag_selects_tree_and_tag() {
    let dir = TempDir::new().expect("temp dir");

    cli()
        .args(["generate", "--language", "nl", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let home: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("nl/home.json")).expect("read"),
    )
    .expect("parse");
    assert_eq!(home["language"], "nl");
}

#[test]
fn check_passes_for_built_in_table_and_generated_tree() {
    let dir = TempDir::new().expect("temp dir");

    cli()
        .arg("check")
        .assert()
        .success()
        .stdout(contains("Checked 16 pages"));

    cli()
        .arg("generate")
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success();
    cli()
        .args(["check", "--tree", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn check_fails_on_broken_tree() {
    let dir = TempDir::new().expect("temp dir");
    let page_dir = dir.path().join("en/broken");
    fs::create_dir_all(&page_dir).expect("dir");
    fs::write(
        page_dir.join("broken.json"),
        r#"{"layout":{"columns":1,"rows":[{"columns":1,"backgroundColor":"","widgets":[
            {"type":"heading","column":1,"order":1,"content":"x","level":1},
            {"type":"text","column":1,"order":1,"content":"y"}
        ]}]}}"#,
    )
    .expect("write");

    cli()
        .args(["check", "--tree", "--output-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("layout issue"));
}

#[test]
fn normalize_backgrounds_rewrites_shorthand() {
    let dir = TempDir::new().expect("temp dir");
    let en = dir.path().join("en");
    fs::create_dir_all(&en).expect("dir");
    fs::write(
        en.join("home.json"),
        r#"{"id":"home","layout":{"columns":1,"rows":[{"columns":1,"backgroundColor":"background-dark","widgets":[]}]}}"#,
    )
    .expect("write");

    cli()
        .args(["normalize-backgrounds", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Fixed 1 of 1 files"));

    let home = fs::read_to_string(en.join("home.json")).expect("read");
    assert!(home.contains("\"backgroundColor\": \"var(--color-background-hover)\""));
}

#[test]
fn copy_language_moves_tree_to_new_ids() {
    let dir = TempDir::new().expect("temp dir");

    cli()
        .args(["generate", "--language", "nl", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();
    cli()
        .args(["copy-language", "--from", "nl", "--to", "en", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Processed 16 page files, mapped 16 unique IDs"));

    let source: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("nl/about/about.json")).expect("read"),
    )
    .expect("parse");
    let copy: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("en/about/about.json")).expect("read"),
    )
    .expect("parse");
    assert_eq!(copy["language"], "en");
    assert_ne!(copy["uniqueId"], source["uniqueId"]);
    assert_eq!(copy["layout"], source["layout"]);
}

#[test]
fn copy_language_to_itself_fails() {
    let dir = TempDir::new().expect("temp dir");
    cli()
        .args(["copy-language", "--from", "en", "--to", "en", "--output-dir"])
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn translate_content_after_copy_produces_english_text() {
    let dir = TempDir::new().expect("temp dir");
    let news = dir.path().join("nl/nieuws");
    fs::create_dir_all(&news).expect("dir");
    fs::write(
        news.join("nieuws.json"),
        r#"{"id":"nieuws","uniqueId":"page-nl-news","title":"Laatste nieuws","language":"nl","layout":{"columns":1,"rows":[{"columns":1,"backgroundColor":"","widgets":[
            {"type":"heading","column":1,"order":1,"content":"Neem contact op","level":2}
        ]}]}}"#,
    )
    .expect("write");

    cli()
        .args(["copy-language", "--from", "nl", "--to", "en", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();
    cli()
        .args(["translate-content", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Translated 1 of 1 files"));

    let page: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("en/news/nieuws.json")).expect("read"),
    )
    .expect("parse");
    assert_eq!(page["id"], "nieuws");
    assert_eq!(page["title"], "Latest news");
    assert_eq!(page["layout"]["rows"][0]["widgets"][0]["content"], "Get in touch");
}
