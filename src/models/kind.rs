//! Kind identifiers and the configured exclusion set.

use std::collections::HashSet;

/// Marker prefix of platform-managed kinds (`__Stat_Kind__`, `_AE_Backup`, ...).
pub const RESERVED_KIND_PREFIX: char = '_';

/// Returns true when `kind` is internal metadata rather than user data.
pub fn is_reserved_kind(kind: &str) -> bool {
    kind.starts_with(RESERVED_KIND_PREFIX)
}

/// One page of a kind scan.
///
/// `next_cursor` is `None` once the scan is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindPage {
    pub kinds: Vec<String>,
    pub next_cursor: Option<String>,
}

/// Kinds that are always left out of a backup, regardless of whether they exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    /// Parse a comma-delimited list such as `Session,AuditLog`.
    ///
    /// An empty string yields an empty set. Entries are kept verbatim.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        raw.split(',').map(str::to_string).collect()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.0.contains(kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
