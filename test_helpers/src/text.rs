//! Ordering assertions over rendered text.

use anyhow::{Result, anyhow, ensure};

/// Returns the byte offset of the first occurrence of `needle`.
///
/// # Errors
///
/// Returns an error quoting `haystack` when `needle` is absent.
pub fn position_of(haystack: &str, needle: &str) -> Result<usize> {
    haystack
        .find(needle)
        .ok_or_else(|| anyhow!("`{needle}` not found in:\n{haystack}"))
}

/// Checks that every needle occurs in `haystack`, each after the previous.
///
/// # Errors
///
/// Returns an error naming the first missing or out-of-order needle.
pub fn ensure_in_order(haystack: &str, needles: &[&str]) -> Result<()> {
    let mut last: Option<(&str, usize)> = None;
    for &needle in needles {
        let position = position_of(haystack, needle)?;
        if let Some((previous, previous_position)) = last {
            ensure!(
                previous_position < position,
                "`{previous}` should precede `{needle}` in:\n{haystack}"
            );
        }
        last = Some((needle, position));
    }
    Ok(())
}
