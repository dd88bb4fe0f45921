use serde::Deserialize;

use super::registry::SectionRegistry;

const INDEX_PREFIX: &str = "section-";

/// How a section is named in the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFormat {
    /// `#features`, falling back to `#section-<i>` for unregistered panels.
    #[default]
    Identifier,
    /// Always `#section-<i>`.
    Index,
}

/// Strips the leading `#` from `location.hash`.
pub fn strip_hash(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

pub fn index_fragment(index: usize) -> String {
    format!("{}{}", INDEX_PREFIX, index)
}

/// Fragment (without `#`) that names `index`.
pub fn fragment_for(index: usize, format: HashFormat, registry: &SectionRegistry) -> String {
    match format {
        HashFormat::Identifier => registry
            .id_of(index)
            .map(str::to_owned)
            .unwrap_or_else(|| index_fragment(index)),
        HashFormat::Index => index_fragment(index),
    }
}

/// Resolve a raw `location.hash` value to a section index.
///
/// Registered identifiers win over the `section-<i>` form. Anything that does
/// not resolve to an index below `total` gives `None`.
pub fn resolve(hash: &str, registry: &SectionRegistry, total: usize) -> Option<usize> {
    let fragment = strip_hash(hash);
    if fragment.is_empty() {
        return None;
    }
    registry
        .index_of(fragment)
        .or_else(|| {
            fragment
                .strip_prefix(INDEX_PREFIX)
                .and_then(|n| n.parse::<usize>().ok())
        })
        .filter(|&index| index < total)
}

/// Whether writing `fragment` would change the current `location.hash`.
pub fn needs_write(current_hash: &str, fragment: &str) -> bool {
    strip_hash(current_hash) != fragment
}
