//! Artifact storage: allocates a per-request results folder and persists
//! the rendered documents under fixed filenames.
//!
//! The folder key is `<job_title_with_underscores>_<YYYYMMDD_HHMMSS>`. That
//! shape is part of the external interface (clients fetch the PDFs by URL),
//! so the key cannot carry a random component; instead a key collision
//! (same job title, same second) fails loudly rather than overwriting.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

pub const RESUME_FILENAME: &str = "resume.pdf";
pub const COVER_LETTER_FILENAME: &str = "cover_letter.pdf";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("artifact folder '{0}' already exists")]
    Collision(String),

    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Addresses of one request's stored documents.
#[derive(Debug, Clone, Serialize)]
pub struct StoredArtifacts {
    pub folder: String,
    /// Relative storage paths, e.g. `static/results/<folder>/resume.pdf`.
    pub resume_path: String,
    pub cover_letter_path: String,
    /// Fully qualified addresses when the request origin is known.
    pub resume_url: Option<String>,
    pub cover_letter_url: Option<String>,
}

/// Writes rendered documents under a per-request folder.
///
/// `root` is the filesystem directory; `public_prefix` is the route prefix
/// the root is served at, used to build the addressable paths.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
    public_prefix: String,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        ArtifactStore {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Derives the folder key for a job title and generation timestamp.
    /// Whitespace in the title becomes `_`; the timestamp has second
    /// granularity.
    pub fn folder_key(job_title: &str, timestamp: DateTime<Local>) -> String {
        let slug: String = job_title
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("{slug}_{}", timestamp.format("%Y%m%d_%H%M%S"))
    }

    /// Creates the folder for this request and writes both documents.
    ///
    /// Fails with `StorageError::Collision` if the derived folder already
    /// exists; no partial addresses are returned on any failure.
    pub async fn store(
        &self,
        job_title: &str,
        timestamp: DateTime<Local>,
        resume_pdf: &[u8],
        cover_letter_pdf: &[u8],
        origin: Option<&str>,
    ) -> Result<StoredArtifacts, StorageError> {
        let folder = Self::folder_key(job_title, timestamp);
        let dir = self.root.join(&folder);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error(&self.root, e))?;

        if let Err(e) = tokio::fs::create_dir(&dir).await {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                return Err(StorageError::Collision(folder));
            }
            return Err(io_error(&dir, e));
        }

        let resume_file = dir.join(RESUME_FILENAME);
        tokio::fs::write(&resume_file, resume_pdf)
            .await
            .map_err(|e| io_error(&resume_file, e))?;

        let cover_file = dir.join(COVER_LETTER_FILENAME);
        tokio::fs::write(&cover_file, cover_letter_pdf)
            .await
            .map_err(|e| io_error(&cover_file, e))?;

        info!("Stored artifacts in {}", dir.display());

        let resume_path = format!("{}/{}/{}", self.public_prefix, folder, RESUME_FILENAME);
        let cover_letter_path =
            format!("{}/{}/{}", self.public_prefix, folder, COVER_LETTER_FILENAME);
        let qualify = |path: &str| {
            origin.map(|base| format!("{}/{}", base.trim_end_matches('/'), path))
        };

        Ok(StoredArtifacts {
            resume_url: qualify(&resume_path),
            cover_letter_url: qualify(&cover_letter_path),
            folder,
            resume_path,
            cover_letter_path,
        })
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}
