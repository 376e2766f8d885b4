//! Timetable document retrieval
//!
//! The parser never reads files or the network itself; it is handed a
//! [`DocumentSource`]. Local paths are resolved against a data root, `http(s)`
//! locations are fetched with reqwest, and [`AnySource`] picks between them.

use crate::{Error, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Capability to retrieve the text of a timetable document
pub trait DocumentSource {
    /// Fetch the full text at `location`
    fn fetch(&self, location: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Whether a location should be fetched over HTTP
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Whether a location contains glob metacharacters
pub fn is_glob_pattern(location: &str) -> bool {
    location.contains(['*', '?', '['])
}

/// Reads documents from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    data_root: PathBuf,
}

impl FileSource {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    /// Resolve a location against the data root
    ///
    /// A leading `/` is treated as relative to the data root so that
    /// site-rooted paths such as `/data/specific/level4.csv` keep working.
    /// Paths that exist as given are used unchanged.
    pub fn resolve(&self, location: &str) -> PathBuf {
        let path = Path::new(location);
        if path.is_absolute() && path.exists() {
            return path.to_path_buf();
        }

        self.data_root.join(location.trim_start_matches('/'))
    }

    /// Expand a glob pattern relative to the data root, sorted by path
    ///
    /// Matches are returned relative to the data root so they resolve back
    /// to the same files through [`FileSource::resolve`].
    pub fn expand_glob(&self, pattern: &str) -> Result<Vec<String>> {
        let full_pattern = self.resolve(pattern);
        let full_pattern = full_pattern.to_string_lossy();

        let paths = glob::glob(&full_pattern).map_err(|e| {
            Error::configuration(format!("Invalid document pattern '{}': {}", pattern, e))
        })?;

        let mut matches: Vec<String> = paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .map(|path| match path.strip_prefix(&self.data_root) {
                Ok(relative) => relative.to_string_lossy().into_owned(),
                Err(_) => path.to_string_lossy().into_owned(),
            })
            .collect();
        matches.sort();

        debug!("Pattern '{}' matched {} documents", pattern, matches.len());
        Ok(matches)
    }
}

impl DocumentSource for FileSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        let path = self.resolve(location);
        debug!("Reading timetable document {}", path.display());

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::fetch(location, format!("{} ({})", e, path.display())))
    }
}

/// Fetches documents over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        debug!("Requesting timetable document {}", location);

        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| Error::fetch(location, e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| Error::fetch(location, e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| Error::fetch(location, e.to_string()))
    }
}

/// Dispatches to HTTP or filesystem depending on the location
#[derive(Debug, Clone)]
pub struct AnySource {
    files: FileSource,
    http: HttpSource,
}

impl AnySource {
    pub fn new(data_root: impl Into<PathBuf>, http_timeout: Duration) -> Result<Self> {
        Ok(Self {
            files: FileSource::new(data_root),
            http: HttpSource::new(http_timeout)?,
        })
    }

    pub fn files(&self) -> &FileSource {
        &self.files
    }
}

impl DocumentSource for AnySource {
    async fn fetch(&self, location: &str) -> Result<String> {
        if is_remote(location) {
            self.http.fetch(location).await
        } else {
            self.files.fetch(location).await
        }
    }
}
