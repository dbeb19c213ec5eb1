//! Target-list state for interface shells.
//!
//! A desktop front-end keeps an editable list of files and folders the user
//! has queued, then hands it to [`crate::discover::find_pdfs`] when the run
//! starts. [`TargetList`] is that list as plain state: no widget types, no
//! process-wide singleton, just an ordered, deduplicated set of existing
//! paths owned by whichever layer presents it.
//!
//! [`split_dropped_paths`] parses the payload a drag-and-drop source hands
//! over: space-separated paths where entries containing spaces are wrapped
//! in `{…}` brace groups (the Tk DND convention).

use std::path::PathBuf;

/// Ordered, deduplicated collection of target files/folders.
#[derive(Debug, Default, Clone)]
pub struct TargetList {
    entries: Vec<PathBuf>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All targets in insertion order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a target. Only paths that exist and are not already present are
    /// accepted; returns whether the list changed.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if path.exists() && !self.entries.contains(&path) {
            self.entries.push(path);
            true
        } else {
            false
        }
    }

    /// Add every path from an iterator; returns how many were accepted.
    pub fn add_all<I: IntoIterator<Item = PathBuf>>(&mut self, paths: I) -> usize {
        paths.into_iter().filter(|p| self.add(p.clone())).count()
    }

    /// Remove the targets at the given indices (a selection). Indices are
    /// removed highest-first so earlier removals cannot shift later ones;
    /// out-of-range indices are ignored.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for idx in sorted.into_iter().rev() {
            if idx < self.entries.len() {
                self.entries.remove(idx);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The targets as strings, ready for [`crate::discover::find_pdfs`].
    pub fn as_inputs(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }
}

/// Split a drag-and-drop payload into individual paths.
///
/// Paths are space-separated; a path containing spaces arrives wrapped in
/// braces (`{C:/My Documents/report.pdf}`). Nested or unbalanced closing
/// braces are tolerated. Each token is trimmed, `~`-expanded, and
/// canonicalised when it names an existing path, so the list stays
/// deduplicated even when the same file is dropped under two spellings.
/// Empty tokens are dropped; no existence check is performed here —
/// [`TargetList::add`] does that.
pub fn split_dropped_paths(payload: &str) -> Vec<PathBuf> {
    let mut items: Vec<String> = Vec::new();
    let mut token = String::new();
    let mut depth: u32 = 0;

    for ch in payload.chars() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ' ' if depth == 0 => {
                if !token.is_empty() {
                    items.push(std::mem::take(&mut token));
                }
            }
            _ => token.push(ch),
        }
    }
    if !token.is_empty() {
        items.push(token);
    }

    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            let expanded = crate::discover::expand_tilde(s);
            // Nonexistent paths keep their expanded form; add() rejects them.
            expanded.canonicalize().unwrap_or(expanded)
        })
        .collect()
}
