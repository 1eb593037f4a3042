use std::{fs, path::Path, time::Duration};

use intravox_demo::{
    application::generate::{Generator, RunClock},
    domain::demo::{demo_pages, is_reserved},
    infra::fs::{ASSET_FOLDER_NAME, MEDIA_MARKER_NAME},
};
use serde_json::Value;
use tempfile::TempDir;
use time::macros::datetime;

fn generate_into(root: &Path, clock: RunClock) {
    Generator::new(root, "en", clock)
        .run(demo_pages())
        .expect("generation succeeds");
}

fn first_clock() -> RunClock {
    RunClock::new(datetime!(2025-11-01 09:00 UTC), Duration::from_secs(30 * 86_400))
}

fn read_json(path: &Path) -> Value {
    let contents = fs::read_to_string(path).expect("page readable");
    serde_json::from_str(&contents).expect("page is valid JSON")
}

#[test]
fn every_entry_is_written_with_the_page_schema() {
    let dir = TempDir::new().expect("temp dir");
    generate_into(dir.path(), first_clock());

    for entry in demo_pages() {
        let page = read_json(&dir.path().join(entry.path));
        assert_eq!(page["id"], entry.id, "{}", entry.path);
        assert_eq!(page["title"], entry.title);
        assert_eq!(page["language"], "en");
        assert!(page["uniqueId"].as_str().is_some_and(|id| id.starts_with("page-")));
        assert!(page["created"].is_i64());
        assert!(page["modified"].is_i64());
        assert_eq!(page["layout"]["columns"], 1);

        for row in page["layout"]["rows"].as_array().expect("rows") {
            let columns = row["columns"].as_u64().expect("row columns");
            assert!(row["backgroundColor"].is_string());
            for widget in row["widgets"].as_array().expect("widgets") {
                assert!(widget["type"].is_string());
                let column = widget["column"].as_u64().expect("widget column");
                assert!(widget["order"].is_u64());
                assert!(
                    (1..=columns).contains(&column),
                    "{}: column {column} outside {columns}",
                    entry.path
                );
            }
        }
    }
}

#[test]
fn second_run_only_changes_modified() {
    let dir = TempDir::new().expect("temp dir");
    generate_into(dir.path(), first_clock());

    let before: Vec<Value> = demo_pages()
        .iter()
        .map(|entry| read_json(&dir.path().join(entry.path)))
        .collect();

    let later = RunClock::new(datetime!(2025-11-02 09:00 UTC), Duration::from_secs(86_400));
    generate_into(dir.path(), later);

    for (entry, mut first) in demo_pages().iter().zip(before) {
        let mut second = read_json(&dir.path().join(entry.path));
        assert_eq!(second["modified"], later.modified);
        assert_eq!(second["created"], first_clock().created);

        first["modified"] = Value::Null;
        second["modified"] = Value::Null;
        assert_eq!(first, second, "{}", entry.path);
    }
}

#[test]
fn second_run_is_byte_identical_apart_from_modified() {
    let dir = TempDir::new().expect("temp dir");
    let clock = first_clock();
    generate_into(dir.path(), clock);
    let before = fs::read(dir.path().join("about/about.json")).expect("read");
    generate_into(dir.path(), clock);
    let after = fs::read(dir.path().join("about/about.json")).expect("read");
    assert_eq!(before, after);
}

#[test]
fn asset_folders_hold_exactly_one_empty_marker() {
    let dir = TempDir::new().expect("temp dir");
    generate_into(dir.path(), first_clock());
    generate_into(dir.path(), first_clock());

    for entry in demo_pages() {
        let page_dir = dir
            .path()
            .join(entry.path)
            .parent()
            .expect("parent")
            .to_path_buf();
        let assets = page_dir.join(ASSET_FOLDER_NAME);

        if is_reserved(entry.path) {
            assert!(!assets.exists(), "{} must not get assets", entry.path);
            continue;
        }

        let listing: Vec<_> = fs::read_dir(&assets)
            .expect("asset folder exists")
            .map(|item| item.expect("entry").file_name())
            .collect();
        assert_eq!(listing, vec![MEDIA_MARKER_NAME], "{}", entry.path);
        let marker = fs::metadata(assets.join(MEDIA_MARKER_NAME)).expect("marker");
        assert_eq!(marker.len(), 0);
    }
}

#[test]
fn documents_use_four_space_indent_without_trailing_newline() {
    let dir = TempDir::new().expect("temp dir");
    generate_into(dir.path(), first_clock());

    let raw = fs::read_to_string(dir.path().join("home.json")).expect("read");
    assert!(raw.starts_with("{\n    \"id\": \"home\",\n    \"uniqueId\": \"page-"));
    assert!(raw.ends_with('}'));
    assert!(raw.contains("\n        \"columns\": 1,\n        \"rows\": ["));
}

#[test]
fn about_page_matches_expected_hero() {
    let dir = TempDir::new().expect("temp dir");
    generate_into(dir.path(), first_clock());

    let about = read_json(&dir.path().join("about/about.json"));
    assert_eq!(about["id"], "about");
    assert_eq!(about["title"], "About IntraVox");

    let hero = &about["layout"]["rows"][0];
    assert_eq!(hero["backgroundColor"], "var(--color-primary-element)");
    let widgets = hero["widgets"].as_array().expect("widgets");
    let summary: Vec<_> = widgets
        .iter()
        .map(|widget| {
            (
                widget["type"].as_str().expect("type"),
                widget["column"].as_u64().expect("column"),
                widget["order"].as_u64().expect("order"),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("image", 1, 1), ("heading", 1, 2), ("text", 1, 3)]
    );
    assert_eq!(widgets[1]["level"], 1);
    assert_eq!(widgets[0]["objectFit"], "cover");
}

#[test]
fn every_page_matches_its_snapshot() {
    let dir = TempDir::new().expect("temp dir");
    generate_into(dir.path(), first_clock());

    for entry in demo_pages() {
        let mut page = read_json(&dir.path().join(entry.path));
        page["uniqueId"] = Value::from("[unique-id]");
        page["created"] = Value::from("[created]");
        page["modified"] = Value::from("[modified]");

        let name = entry.path.trim_end_matches(".json").replace(['/', '-'], "_");
        insta::assert_json_snapshot!(name.as_str(), page);
    }
}
