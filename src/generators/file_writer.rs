use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// What a write call did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// The bundled license headers, compiled into the binary and read once.
/// Passed explicitly into the writers instead of being looked up ambiently.
#[derive(Debug, Clone, Copy)]
pub struct LicenseHeaders {
    pub java: &'static str,
    pub properties: &'static str,
}

impl LicenseHeaders {
    pub fn bundled() -> Self {
        Self {
            java: include_str!("../resources/license-header-java.txt"),
            properties: include_str!("../resources/license-header.txt"),
        }
    }
}

/// Writes a rendered artifact only when its content actually changed.
///
/// The header is composed with the body for the comparison as well as the
/// write, so a regenerated file compares equal to what is on disk and the
/// header survives updates. All writes are whole-file replaces.
pub struct IdempotentWriter {
    header: &'static str,
}

impl IdempotentWriter {
    pub fn new(header: &'static str) -> Self {
        Self { header }
    }

    pub fn write(&self, target: &Path, body: &str) -> Result<WriteOutcome> {
        let content = format!("{}{}", self.header, body);

        if target.exists() {
            let existing =
                fs::read_to_string(target).map_err(|err| Error::file_io(target, err))?;
            if existing == content {
                return Ok(WriteOutcome::Unchanged);
            }
            fs::write(target, &content).map_err(|err| Error::file_io(target, err))?;
            return Ok(WriteOutcome::Updated);
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::file_io(target, err))?;
        }
        fs::write(target, &content).map_err(|err| Error::file_io(target, err))?;
        Ok(WriteOutcome::Created)
    }
}
