//! The end-to-end rewrite: read, regroup, render, write.

use crate::catalogue::orientation::OrientationSource;
use crate::catalogue::{parser, render, Registry};
use crate::config::Config;
use crate::document;
use crate::error::Result;
use crate::types::Orientation;

/// What one run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Orientation applied to raw lines.
    pub orientation: Orientation,
    /// Section headers rendered.
    pub groups: usize,
    /// Album rows rendered.
    pub entries: usize,
    /// Entries parsed from unformatted lines.
    pub raw_entries: usize,
    /// Entries re-absorbed from existing sections.
    pub reabsorbed_entries: usize,
    /// Lines dropped because they carried no usable entry.
    pub discarded: usize,
}

/// Rendered document together with its run summary.
#[derive(Debug, Clone)]
pub struct Organized {
    /// Full replacement text for the document.
    pub text: String,
    /// Counts describing the run.
    pub summary: RunSummary,
}

/// Regroup a document held in memory.
///
/// A fresh [`Registry`] is built per call, so repeated calls never share
/// state.
pub fn organize_text(text: &str, orientation: &dyn OrientationSource) -> Result<Organized> {
    let lines: Vec<&str> = text.lines().collect();
    let orientation = orientation.detect(&lines);

    let mut registry = Registry::new();
    let raw = parser::parse_raw_entries(&lines, orientation, &mut registry);
    let sections = parser::parse_sections(&lines, &mut registry)?;
    let text = render::render(&mut registry);

    let summary = RunSummary {
        orientation,
        groups: registry.len(),
        entries: registry.entry_count(),
        raw_entries: raw.added,
        reabsorbed_entries: sections.added,
        discarded: raw.discarded + sections.discarded,
    };
    Ok(Organized { text, summary })
}

/// Rewrite the configured document in place.
///
/// Nothing is written unless the whole document parses.
pub fn organize_file(config: &Config) -> Result<RunSummary> {
    let path = &config.document_path;
    let text = document::read(path)?;

    let source = config.orientation_source();
    let organized = organize_text(&text, source.as_ref())?;
    document::write(path, &organized.text)?;

    let s = organized.summary;
    tracing::info!(
        "Organized {}: {} entries in {} sections ({} new, {} existing, {} dropped), {}",
        path.display(),
        s.entries,
        s.groups,
        s.raw_entries,
        s.reabsorbed_entries,
        s.discarded,
        s.orientation
    );
    Ok(s)
}
