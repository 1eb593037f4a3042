//! The demo content table: every page the generator writes, keyed by relative path.
//!
//! Paths mirror the navigation hierarchy. Only the reserved root documents sit
//! at the top level; every other page lives in `<section>/<page>.json`.

use std::{path::Path, sync::OnceLock};

use super::page::DemoPage;

mod company;
mod docs;
mod home;
mod newsroom;

/// Root documents that never receive an asset folder.
pub const RESERVED_DOCUMENTS: [&str; 3] = ["home.json", "navigation.json", "footer.json"];

static DEMO_PAGES: OnceLock<Vec<DemoPage>> = OnceLock::new();

pub fn demo_pages() -> &'static [DemoPage] {
    DEMO_PAGES.get_or_init(build_table)
}

pub fn is_reserved(path: &str) -> bool {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| RESERVED_DOCUMENTS.contains(&name))
}

fn build_table() -> Vec<DemoPage> {
    vec![
        home::home(),
        company::about(),
        company::team(),
        company::management(),
        company::departments(),
        company::careers(),
        company::contact(),
        newsroom::news(),
        newsroom::events(),
        newsroom::press(),
        docs::documentation(),
        docs::getting_started(),
        docs::user_guide(),
        docs::faq(),
        docs::downloads(),
        docs::support(),
    ]
}
