use std::path::PathBuf;

pub mod document;
pub mod locator;

pub use document::{CredentialDocument, Section};

/// Everything a run needs to know, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Credentials file to read and rewrite.
    pub credentials_file: PathBuf,
    /// Show what would change without writing the file.
    pub dry_run: bool,
    /// Profile to activate without prompting.
    pub profile: Option<String>,
}

impl Config {
    pub fn new(dry_run: bool, profile: Option<String>) -> Result<Self, locator::Error> {
        Ok(Self {
            credentials_file: locator::credentials_path()?,
            dry_run,
            profile,
        })
    }
}
