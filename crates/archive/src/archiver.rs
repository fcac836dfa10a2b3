use std::path::Path;

use chanarc_api::{
    client::Client,
    error::Error as ApiError,
    fetch::{FetchOutcome, Fetcher},
};
use chanarc_types::{
    attachment::{Attachment, ThreadRef},
    utils::is_safe_filename,
};
use tracing::{debug, error, info};

use super::{document, error::Error, layout::ArchiveLayout};

/// What one archive run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveReport {
    pub json_written: bool,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: Vec<Attachment>,
}

impl ArchiveReport {
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed.len()
    }
}

/// Saves a thread's JSON and every attached file under an [`ArchiveLayout`].
#[derive(Debug, Clone)]
pub struct Archiver {
    client: Client,
    fetcher: Fetcher,
    overwrite: bool,
}

impl Archiver {
    pub fn new(client: Client) -> Self {
        let fetcher = client.fetcher();
        Archiver {
            client,
            fetcher,
            overwrite: false,
        }
    }

    /// Re-download attachments that are already on disk.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Archive `thread` under `base_dir`.
    ///
    /// The thread document must be reachable; any failure there is returned.
    /// A failing attachment is reported and the run moves on to the next one.
    /// Filesystem errors abort the run.
    pub async fn archive(&self, thread: &ThreadRef, base_dir: &Path) -> Result<ArchiveReport, Error> {
        if !is_safe_filename(&thread.board) || !is_safe_filename(&thread.thread_id) {
            return Err(Error::InvalidThread(thread.to_string()));
        }

        let layout = ArchiveLayout::new(base_dir, thread);
        layout.create().await?;
        debug!("Archiving {} into {}", thread, layout.root().display());

        let resp = self.client.get_thread(thread).await?;
        let mut report = ArchiveReport {
            json_written: document::write_json(&layout.thread_json(), &resp.raw).await?,
            ..Default::default()
        };

        for attachment in self.client.attachments(&resp.thread()?) {
            match &attachment.original_name {
                Some(name) => println!("Downloading {} ({})...", attachment.file_url, name),
                None => println!("Downloading {}...", attachment.file_url),
            }
            let target = layout.image(&attachment.filename);
            match self
                .fetcher
                .fetch(&attachment.file_url, &target, self.overwrite)
                .await
            {
                Ok(FetchOutcome::Downloaded { .. }) => report.downloaded += 1,
                Ok(FetchOutcome::Skipped) => report.skipped += 1,
                Ok(_) => {
                    error!(
                        "Failed to download file: {} {}",
                        target.display(),
                        attachment.file_url
                    );
                    report.failed.push(attachment);
                }
                Err(ApiError::Io(e)) => return Err(e.into()),
                Err(e) => {
                    error!(
                        "Failed to download file: {} {}: {}",
                        target.display(),
                        attachment.file_url,
                        e
                    );
                    report.failed.push(attachment);
                }
            }
        }

        info!(
            "Archived {}: {} files, {} downloaded, {} already present, {} failed",
            thread,
            report.total(),
            report.downloaded,
            report.skipped,
            report.failed.len()
        );
        Ok(report)
    }
}
