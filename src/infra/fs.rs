//! Filesystem adapter for the demo tree.
//!
//! Every operation is idempotent except [`DiskTree::write_document`], which
//! overwrites. Errors carry the absolute path they failed on.

use std::{
    fs::{self, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::error::InfraError;

/// Sibling folder every non-root page gets for its images.
pub const ASSET_FOLDER_NAME: &str = "📷 images";
/// Zero-byte file telling Nextcloud to keep the folder out of media indexing.
pub const MEDIA_MARKER_NAME: &str = ".nomedia";

const LEGACY_ASSET_FOLDER_NAME: &str = "images";

/// A content tree rooted at one language directory.
#[derive(Debug, Clone)]
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn ensure_dir(&self, relative: impl AsRef<Path>) -> Result<PathBuf, InfraError> {
        let path = self.resolve(relative);
        fs::create_dir_all(&path).map_err(|err| InfraError::io(&path, err))?;
        Ok(path)
    }

    /// Write `bytes` to `relative`, replacing whatever is there.
    pub fn write_document(
        &self,
        relative: impl AsRef<Path>,
        bytes: &[u8],
    ) -> Result<PathBuf, InfraError> {
        let path = self.resolve(relative);
        fs::write(&path, bytes).map_err(|err| InfraError::io(&path, err))?;
        Ok(path)
    }

    /// Raw bytes of a document if it exists; a missing file is `Ok(None)`.
    pub fn read_document(&self, relative: impl AsRef<Path>) -> Result<Option<Vec<u8>>, InfraError> {
        read_optional(&self.resolve(relative))
    }

    /// Create `<dir>/📷 images/.nomedia` next to a page, leaving existing ones alone.
    pub fn ensure_asset_folder(&self, page_dir: impl AsRef<Path>) -> Result<PathBuf, InfraError> {
        let folder = self.ensure_dir(page_dir.as_ref().join(ASSET_FOLDER_NAME))?;
        let marker = folder.join(MEDIA_MARKER_NAME);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&marker)
            .map_err(|err| InfraError::io(&marker, err))?;
        Ok(folder)
    }
}

/// File contents as bytes. Decoding is left to the caller so that a file which
/// is not UTF-8 reads like any other unparsable document.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, InfraError> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(InfraError::io(path, err)),
    }
}

/// Every `.json` file under `root`, sorted, skipping asset folders and the named files.
pub fn json_files(root: &Path, skip_names: &[&str]) -> Result<Vec<PathBuf>, InfraError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && is_asset_folder(entry.path())));

    for entry in walker {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".json") && !skip_names.contains(&name.as_ref()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Flatten a walk failure into an I/O error on the offending path.
pub fn walk_error(root: &Path, err: walkdir::Error) -> InfraError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    InfraError::io(path, source)
}

fn is_asset_folder(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == ASSET_FOLDER_NAME || name == LEGACY_ASSET_FOLDER_NAME)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn asset_folder_is_idempotent_and_keeps_marker_empty() {
        let dir = TempDir::new().expect("temp dir");
        let tree = DiskTree::new(dir.path());

        let first = tree.ensure_asset_folder("about").expect("first");
        let second = tree.ensure_asset_folder("about").expect("second");
        assert_eq!(first, second);
        assert_eq!(first, dir.path().join("about").join(ASSET_FOLDER_NAME));

        let marker = first.join(MEDIA_MARKER_NAME);
        assert_eq!(fs::metadata(&marker).expect("marker").len(), 0);
        assert_eq!(fs::read_dir(&first).expect("list").count(), 1);
    }

    #[test]
    fn write_document_overwrites() {
        let dir = TempDir::new().expect("temp dir");
        let tree = DiskTree::new(dir.path());
        tree.ensure_dir("news").expect("dir");

        tree.write_document("news/news.json", b"{\"a\": 1, \"long\": true}")
            .expect("first write");
        tree.write_document("news/news.json", b"{}").expect("second write");

        assert_eq!(
            tree.read_document("news/news.json").expect("read"),
            Some(b"{}".to_vec())
        );
        assert_eq!(tree.read_document("missing.json").expect("read"), None);
    }

    #[test]
    fn write_into_missing_directory_surfaces_path() {
        let dir = TempDir::new().expect("temp dir");
        let tree = DiskTree::new(dir.path());

        let err = tree
            .write_document("absent/page.json", b"{}")
            .expect_err("parent does not exist");
        assert!(matches!(err, InfraError::Io { ref path, .. } if path.ends_with("absent/page.json")));
    }

    #[test]
    fn json_files_skip_asset_folders_and_named_documents() {
        let dir = TempDir::new().expect("temp dir");
        let tree = DiskTree::new(dir.path());
        tree.ensure_dir("about").expect("dir");
        tree.ensure_asset_folder("about").expect("assets");
        tree.ensure_dir("news/images").expect("legacy assets");
        tree.write_document("about/about.json", b"{}").expect("write");
        tree.write_document("about/📷 images/meta.json", b"{}").expect("write");
        tree.write_document("news/images/meta.json", b"{}").expect("write");
        tree.write_document("navigation.json", b"{}").expect("write");
        tree.write_document("home.json", b"{}").expect("write");

        let files = json_files(dir.path(), &["navigation.json"]).expect("walk");
        let relative: Vec<_> = files
            .iter()
            .map(|path| path.strip_prefix(dir.path()).expect("prefix").to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![PathBuf::from("about/about.json"), PathBuf::from("home.json")]
        );
    }
}
