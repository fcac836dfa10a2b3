use std::path::{Path, PathBuf};

use chanarc_types::attachment::ThreadRef;

pub const SITE_DIR: &str = "8chan";
pub const IMAGES_DIR: &str = "images";

/// On-disk location of one archived thread:
/// `<base>/8chan/<board>/<thread_id>/{<thread_id>.json, images/}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLayout {
    root: PathBuf,
    thread_id: String,
}

impl ArchiveLayout {
    pub fn new(base_dir: &Path, thread: &ThreadRef) -> Self {
        ArchiveLayout {
            root: base_dir
                .join(SITE_DIR)
                .join(&thread.board)
                .join(&thread.thread_id),
            thread_id: thread.thread_id.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn thread_json(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.thread_id))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn image(&self, filename: &str) -> PathBuf {
        self.images_dir().join(filename)
    }

    /// Create the whole tree. Creating `images/` creates its parents.
    pub async fn create(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.images_dir()).await
    }
}
