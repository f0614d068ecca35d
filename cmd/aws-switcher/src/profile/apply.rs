use std::{fmt, path::Path};

use crate::config::CredentialDocument;

use super::{
    Error, ACCESS_KEY_ID, DEFAULT_PROFILE, MANAGED_MARKER, MANAGED_VALUE, REGION,
    SECRET_ACCESS_KEY,
};

const MASK: &str = "****";

/// What `apply` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// `[default]` now holds the profile's credentials and the file was saved.
    Switched,
    /// Nothing was changed; this is what would have been written.
    Preview(Preview),
}

/// Dry run summary with the credentials masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub profile: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: Option<String>,
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- DRY RUN MODE (no changes will be made) ---")?;
        writeln!(
            f,
            "Would update [{DEFAULT_PROFILE}] profile with credentials from [{}]:",
            self.profile
        )?;
        writeln!(f, "  {ACCESS_KEY_ID} = {}", self.access_key_id)?;
        write!(f, "  {SECRET_ACCESS_KEY} = {}", self.secret_access_key)?;
        if let Some(region) = &self.region {
            write!(f, "\n  {REGION} = {region}")?;
        }
        Ok(())
    }
}

/// Hides all but the first and last four characters of a credential.
pub fn mask(credential: &str) -> String {
    let len = credential.chars().count();
    if len <= 8 {
        return MASK.to_owned();
    }
    let head: String = credential.chars().take(4).collect();
    let tail: String = credential.chars().skip(len - 4).collect();
    format!("{head}{MASK}{tail}")
}

/// Copies `profile`'s credentials into `[default]` and saves the document to `path`.
///
/// With `dry_run` the document is left untouched and a [`Preview`] is returned instead.
pub fn apply(
    document: &mut CredentialDocument,
    profile: &str,
    dry_run: bool,
    path: &Path,
) -> Result<Applied, Error> {
    let (access_key_id, secret_access_key, region) = {
        let section = document.section(profile);
        let value = |key: &str| section.map(|s| s.value(key)).unwrap_or_default().to_owned();
        (
            value(ACCESS_KEY_ID),
            value(SECRET_ACCESS_KEY),
            value(REGION),
        )
    };

    let missing: Vec<&'static str> = [
        (ACCESS_KEY_ID, &access_key_id),
        (SECRET_ACCESS_KEY, &secret_access_key),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(key, _)| key)
    .collect();
    if !missing.is_empty() {
        return Err(Error::Incomplete {
            name: profile.to_owned(),
            missing,
        });
    }

    let region = (!region.is_empty()).then_some(region);

    if dry_run {
        tracing::debug!("dry run, not writing {}", path.display());
        return Ok(Applied::Preview(Preview {
            profile: profile.to_owned(),
            access_key_id: mask(&access_key_id),
            secret_access_key: mask(&secret_access_key),
            region,
        }));
    }

    let default = document.section_mut(DEFAULT_PROFILE);
    default.set(ACCESS_KEY_ID, access_key_id);
    default.set(SECRET_ACCESS_KEY, secret_access_key);
    default.set(MANAGED_MARKER, MANAGED_VALUE);
    if let Some(region) = region {
        default.set(REGION, region);
    }
    document.save(path)?;
    tracing::debug!("[{DEFAULT_PROFILE}] now uses credentials from [{profile}]");
    Ok(Applied::Switched)
}
