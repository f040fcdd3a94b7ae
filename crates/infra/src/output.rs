// crates/infra/src/output.rs
use std::path::Path;

use corpus_scrape_domain::model::ScrapeResult;
use corpus_scrape_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

use crate::persistence::FileWriter;

/// Serializes a [`ScrapeResult`] as the output JSON document.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonResultWriter {
    pretty: bool,
}

impl JsonResultWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_bytes(&self, result: &ScrapeResult) -> Result<Vec<u8>> {
        let bytes = if self.pretty { serde_json::to_vec_pretty(result)? } else { serde_json::to_vec(result)? };
        Ok(bytes)
    }

    /// Write the document to `path`, replacing any existing file atomically.
    pub fn write(&self, result: &ScrapeResult, path: &Path) -> Result<()> {
        let bytes = self.to_bytes(result)?;
        debug!(path = %path.display(), bytes = bytes.len(), "writing output");
        FileWriter::atomic_write(path, &bytes)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        Ok(())
    }
}
