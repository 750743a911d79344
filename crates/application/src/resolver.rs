//! Folder auth inheritance resolution
//!
//! Resolution happens once, at submission time. The stored record keeps
//! its `Inherit from Parent` marker so every send re-evaluates against
//! the folder's current profile.

use restbench_domain::{Collection, RequestRecord, WireAuth};

/// Resolves the effective auth fragment for an outgoing execution.
///
/// A record marked `Inherit from Parent` takes its folder's profile when
/// the folder resolves and carries a configured (non-`No Auth`) profile;
/// otherwise it falls back to `No_Auth`. Folders are the root of the
/// chain, so a folder whose own profile is the inherit marker also falls
/// back to `No_Auth`. Any other record profile is forward-mapped as-is.
#[must_use]
pub fn resolve_auth(record: &RequestRecord, collections: &[Collection]) -> WireAuth {
    if !record.auth.inherits() {
        return WireAuth::from_config(&record.auth);
    }

    let parent = record
        .collection_id
        .as_deref()
        .and_then(|id| collections.iter().find(|c| c.id == id));

    match parent {
        Some(folder) if folder.auth.is_configured() && !folder.auth.inherits() => {
            WireAuth::from_config(&folder.auth)
        }
        _ => WireAuth::none(),
    }
}
