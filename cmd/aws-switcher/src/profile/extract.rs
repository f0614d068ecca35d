use crate::config::{document::PRE_SECTION, CredentialDocument};

use super::{Error, DEFAULT_PROFILE, MANAGED_MARKER, MANAGED_VALUE};

/// Lists the profiles that can be switched to, in file order.
///
/// An existing `[default]` must carry the managed marker, otherwise switching
/// would overwrite credentials the user wrote by hand.
pub fn extract_profiles(document: &CredentialDocument) -> Result<Vec<String>, Error> {
    if let Some(default) = document.section(DEFAULT_PROFILE) {
        if default.get(MANAGED_MARKER) != Some(MANAGED_VALUE) {
            return Err(Error::UnmanagedDefault);
        }
    }

    let profiles: Vec<String> = document
        .section_names()
        .filter(|name| *name != PRE_SECTION && *name != DEFAULT_PROFILE)
        .map(ToOwned::to_owned)
        .collect();
    tracing::debug!("found profiles: {profiles:?}");

    if profiles.is_empty() {
        return Err(Error::NoProfiles);
    }
    Ok(profiles)
}
