use itertools::Itertools;

use crate::config::document;

pub mod apply;
pub mod extract;

pub use apply::{apply, mask, Applied, Preview};
pub use extract::extract_profiles;

/// Section that AWS tooling uses when no profile is named.
pub const DEFAULT_PROFILE: &str = "default";

pub const ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const REGION: &str = "region";

/// Written into `[default]` to record that this tool owns its contents.
pub const MANAGED_MARKER: &str = "aws_switcher_managed";
pub const MANAGED_VALUE: &str = "true";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "found a [default] profile not created by this tool.\n\n\
         To fix this:\n  \
         1. Rename your [default] profile to something like [default-backup] in ~/.aws/credentials\n  \
         2. Run this tool again to create a new managed [default] profile"
    )]
    UnmanagedDefault,
    #[error("no AWS profiles found in ~/.aws/credentials")]
    NoProfiles,
    #[error("profile '{name}' is missing required credentials ({})", join_fields(.missing))]
    Incomplete {
        name: String,
        missing: Vec<&'static str>,
    },
    #[error("profile '{0}' not found in ~/.aws/credentials")]
    NotFound(String),
    #[error(transparent)]
    Document(#[from] document::Error),
}

fn join_fields(fields: &[&str]) -> String {
    fields.iter().join(", ")
}
