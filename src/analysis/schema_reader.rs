use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::analysis::json_schema::SchemaDocument;
use crate::error::Result;
use crate::interface::output::Logger;

/// Marker distinguishing component metadata from the other JSON documents
/// (dataformats, languages) that share the build output directory. The
/// whitespace is part of the contract: documents are generated with exactly
/// one space after the colon.
const COMPONENT_KIND_MARKER: &str = "\"kind\": \"component\"";

/// Locates component metadata documents in the build output directory.
///
/// The directory is walked once up front; lookups then run against the
/// collected candidate list. Candidates are sorted by path so that repeated
/// runs resolve a name to the same file regardless of directory order.
pub struct SchemaReader {
    candidates: Vec<PathBuf>,
    logger: Logger,
}

impl SchemaReader {
    pub fn scan(build_dir: &Path, logger: Logger) -> Self {
        let mut candidates: Vec<PathBuf> = WalkDir::new(build_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry.path().extension().map_or(false, |ext| ext == "json")
            })
            .map(|entry| entry.path().to_path_buf())
            .collect();
        candidates.sort();

        logger.debug(&format!(
            "Found {} JSON file(s) under {}",
            candidates.len(),
            build_dir.display()
        ));

        Self { candidates, logger }
    }

    /// Find and parse the metadata document for one component identifier.
    ///
    /// The first candidate (in sorted path order) whose file stem equals the
    /// identifier and whose text carries the component kind marker is parsed;
    /// a parse failure there is an error. No qualifying candidate means the
    /// build emitted nothing for this identifier, which callers treat as
    /// "nothing to generate" rather than a failure. Unreadable candidates are
    /// logged and passed over.
    pub fn load_component(&self, name: &str) -> Result<Option<SchemaDocument>> {
        for path in &self.candidates {
            if path.file_stem().and_then(|stem| stem.to_str()) != Some(name) {
                continue;
            }

            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    self.logger.warning(&format!(
                        "Skipping unreadable metadata file {}: {}",
                        path.display(),
                        err
                    ));
                    continue;
                }
            };

            if !text.contains(COMPONENT_KIND_MARKER) {
                continue;
            }

            return Ok(Some(SchemaDocument::parse(&text)?));
        }

        Ok(None)
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}
