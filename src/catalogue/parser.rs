//! Line parsers that fill a [`Registry`].
//!
//! Raw lines are regrouped by their primary field; rows already rendered
//! under a section header are re-absorbed into that section's group. The two
//! passes run over the same lines and never claim the same one.

use std::sync::LazyLock;

use regex::Regex;

use super::Registry;
use crate::constants::{markers, preamble};
use crate::error::{Error, Result};
use crate::types::{Entry, GroupKey, Orientation};

/// Regex matching a primary field wrapped in bold emphasis.
#[allow(clippy::expect_used)]
static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*(.*)\*\*$").expect("valid regex: RE_BOLD")
});

/// Counts reported by a parsing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Entries added to the registry.
    pub added: usize,
    /// Non-blank lines dropped because they carried no usable entry.
    pub discarded: usize,
}

/// Header, album row, or any other `#` line.
fn is_structural(line: &str) -> bool {
    line.starts_with(markers::HEADER)
        || line.starts_with(markers::ALBUM)
        || line.starts_with(markers::COMMENT)
}

/// Lines of the generated preamble, which are not entries.
fn is_preamble(line: &str) -> bool {
    let line = line.trim();
    line.starts_with(preamble::USAGE_PREFIX) || preamble::LINES.iter().any(|p| p.trim() == line)
}

/// Parse unformatted `Title: Artist` lines into the registry.
///
/// Structural lines and preamble lines are skipped. Every other line is
/// split on the delimiter (reversed when `orientation` says so) and filed
/// under the key of its primary field.
pub fn parse_raw_entries(
    lines: &[&str],
    orientation: Orientation,
    registry: &mut Registry,
) -> ParseStats {
    let mut stats = ParseStats::default();

    for (index, line) in lines.iter().enumerate() {
        if is_structural(line) || is_preamble(line) {
            continue;
        }

        let entry = Entry::split(line, orientation);
        if entry.is_empty() {
            if !line.trim().is_empty() {
                tracing::warn!("Line {}: no title in {:?}, dropping it", index + 1, line.trim());
                stats.discarded += 1;
            }
            continue;
        }

        if let Some(key) = registry.insert(entry) {
            tracing::debug!("Line {}: raw entry filed under {key}", index + 1);
            stats.added += 1;
        }
    }

    stats
}

/// Parse a rendered album row (` - **Title**: Artist`) back into an entry.
///
/// Returns `None` for lines that are not album rows.
pub fn parse_album_row(line: &str) -> Option<Entry> {
    let body = line.strip_prefix(markers::ALBUM)?;
    let mut fields = body.split(markers::DELIMITER).map(str::trim);
    let first = fields.next().unwrap_or_default();
    let primary = RE_BOLD
        .captures(first)
        .and_then(|caps| caps.get(1))
        .map_or(first, |m| m.as_str());

    Some(Entry::new(std::iter::once(primary).chain(fields)))
}

/// Key declared by a section header line, normalized like entry keys.
fn header_key(line: &str) -> Option<GroupKey> {
    line.strip_prefix(markers::HEADER)?
        .trim_start()
        .chars()
        .next()
        .map(GroupKey::classify)
}

/// Re-absorb previously rendered sections into the registry.
///
/// Each header claims the run of album rows directly beneath it. Rows that
/// follow no header are reported and dropped.
pub fn parse_sections(lines: &[&str], registry: &mut Registry) -> Result<ParseStats> {
    let mut stats = ParseStats::default();
    let mut claimed = vec![false; lines.len()];

    for (index, line) in lines.iter().enumerate() {
        if !line.starts_with(markers::HEADER) {
            continue;
        }

        let key = header_key(line)
            .ok_or_else(|| Error::parse(index + 1, "section header has no key character"))?;
        let group = registry.group_mut(key);
        tracing::debug!("Line {}: section {key}", index + 1);

        for (offset, row) in lines[index + 1..].iter().enumerate() {
            let Some(entry) = parse_album_row(row) else {
                break;
            };
            let row_index = index + 1 + offset;
            claimed[row_index] = true;

            if entry.is_empty() {
                tracing::warn!("Line {}: album row has no title, dropping it", row_index + 1);
                stats.discarded += 1;
                continue;
            }
            group.push(entry);
            stats.added += 1;
        }
    }

    for (index, line) in lines.iter().enumerate() {
        if line.starts_with(markers::ALBUM) && !claimed[index] {
            tracing::warn!(
                "Line {}: album row outside any section, dropping {:?}",
                index + 1,
                line.trim()
            );
            stats.discarded += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn key(c: char) -> GroupKey {
        GroupKey::classify(c)
    }

    #[test]
    fn test_raw_entries_grouped_by_first_char() {
        let lines = ["# Albums", "The Wall: Pink Floyd", "1984: Van Halen", "éclair: Someone"];
        let mut registry = Registry::new();
        let stats = parse_raw_entries(&lines, Orientation::Normal, &mut registry);

        assert_eq!(stats.added, 3);
        let keys: String = registry.keys().map(GroupKey::as_char).collect();
        assert_eq!(keys, "T1~");
    }

    #[test]
    fn test_raw_entries_reversed() {
        let lines = ["Pink Floyd: The Wall", "Nirvana: Nevermind"];
        let mut registry = Registry::new();
        parse_raw_entries(&lines, Orientation::Reversed, &mut registry);

        let group = registry.get(key('N')).unwrap();
        assert_eq!(group.entries()[0].fields(), ["Nevermind", "Nirvana"]);
        assert!(registry.get(key('T')).is_some());
    }

    #[test]
    fn test_raw_entries_skip_structure_and_blanks() {
        let lines = [
            "### A",
            " - **Abbey Road**: The Beatles",
            "## Note: ",
            preamble::USAGE,
            "",
            "   ",
            ": nobody",
        ];
        let mut registry = Registry::new();
        let stats = parse_raw_entries(&lines, Orientation::Normal, &mut registry);

        assert!(registry.is_empty());
        assert_eq!(stats, ParseStats { added: 0, discarded: 1 });
    }

    #[test]
    fn test_raw_entries_skip_older_usage_note() {
        let lines = [
            "# Albums",
            "## Note: ",
            "If you want to add any album, just add it in the folowing syntax:\
             **\\<ALBUM_NAME\\>: \\<ARTIST\\>** and run `organize_albums.py`",
            "",
            "Ten: Pearl Jam",
        ];
        let mut registry = Registry::new();
        let stats = parse_raw_entries(&lines, Orientation::Normal, &mut registry);

        assert_eq!(stats, ParseStats { added: 1, discarded: 0 });
        assert!(registry.get(key('I')).is_none());
        assert_eq!(registry.get(key('T')).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_album_row() {
        let entry = parse_album_row(" - **Dark Side of the Moon**: Pink Floyd").unwrap();
        assert_eq!(entry.fields(), ["Dark Side of the Moon", "Pink Floyd"]);

        let single = parse_album_row(" - **Nevermind**").unwrap();
        assert_eq!(single.fields(), ["Nevermind"]);

        assert!(parse_album_row("Nevermind: Nirvana").is_none());
    }

    #[test]
    fn test_parse_album_row_without_bold() {
        let entry = parse_album_row(" - Ten: Pearl Jam").unwrap();
        assert_eq!(entry.fields(), ["Ten", "Pearl Jam"]);
    }

    #[test]
    fn test_sections_reabsorb_rows() {
        let lines = [
            "### a",
            " - **Abbey Road**: The Beatles",
            " - **Animals**: Pink Floyd",
            "",
            " - **Orphan**: Nobody",
            "### 1",
            " - **1984**: Van Halen",
            "### ?",
        ];
        let mut registry = Registry::new();
        let stats = parse_sections(&lines, &mut registry).unwrap();

        assert_eq!(stats, ParseStats { added: 3, discarded: 1 });
        assert_eq!(registry.get(key('A')).unwrap().len(), 2);
        assert_eq!(registry.get(key('1')).unwrap().len(), 1);
        // Empty sections still register their key
        assert!(registry.get(GroupKey::CATCH_ALL).unwrap().is_empty());
        assert!(registry.get(key('O')).is_none());
    }

    #[test]
    fn test_section_keeps_declared_key() {
        let lines = ["### B", " - **Abbey Road**: The Beatles"];
        let mut registry = Registry::new();
        parse_sections(&lines, &mut registry).unwrap();

        assert_eq!(registry.get(key('B')).unwrap().len(), 1);
        assert!(registry.get(key('A')).is_none());
    }

    #[test]
    fn test_header_without_key_fails() {
        let lines = ["# Albums", "###   "];
        let mut registry = Registry::new();
        let err = parse_sections(&lines, &mut registry).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_passes_do_not_double_count() {
        let lines = ["### T", " - **The Wall**: Pink Floyd", "Ten: Pearl Jam"];
        let mut registry = Registry::new();
        let raw = parse_raw_entries(&lines, Orientation::Normal, &mut registry);
        let sections = parse_sections(&lines, &mut registry).unwrap();

        assert_eq!(raw.added, 1);
        assert_eq!(sections.added, 1);
        assert_eq!(registry.entry_count(), 2);
        assert_eq!(registry.len(), 1);
    }
}
