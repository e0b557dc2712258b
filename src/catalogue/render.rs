//! Serialization of a [`Registry`] back to Markdown.

use std::fmt::Write;

use super::{Group, Registry};
use crate::constants::{markers, preamble};
use crate::types::Entry;

/// Render one entry as an album row, without the trailing newline.
///
/// The primary field is bolded; remaining fields follow after `": "`.
pub fn render_entry(entry: &Entry) -> String {
    let mut row = format!(
        "{}{}{}{}",
        markers::ALBUM,
        markers::BOLD,
        entry.primary(),
        markers::BOLD
    );
    for field in entry.rest() {
        row.push_str(markers::RENDERED_DELIMITER);
        row.push_str(field);
    }
    row
}

/// Render a section header and its rows. Entries are expected to be sorted.
fn render_group(out: &mut String, group: &Group) {
    let _ = writeln!(out, "{}{}", markers::HEADER, group.key());
    for entry in group.entries() {
        let _ = writeln!(out, "{}", render_entry(entry));
    }
}

/// Sort every group and render the full document, preamble included.
pub fn render(registry: &mut Registry) -> String {
    registry.sort_entries();

    let mut out = String::new();
    for line in preamble::LINES {
        let _ = writeln!(out, "{line}");
    }
    out.push('\n');

    for group in registry.groups() {
        render_group(&mut out, group);
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::GroupKey;

    #[test]
    fn test_render_entry_bolds_primary() {
        let entry = Entry::new(["Dark Side of the Moon", "Pink Floyd"]);
        assert_eq!(render_entry(&entry), " - **Dark Side of the Moon**: Pink Floyd");
    }

    #[test]
    fn test_render_single_field_entry() {
        let entry = Entry::new(["Nevermind"]);
        assert_eq!(render_entry(&entry), " - **Nevermind**");
    }

    #[test]
    fn test_render_extra_fields() {
        let entry = Entry::new(["Live", "At Pompeii", "Pink Floyd"]);
        assert_eq!(render_entry(&entry), " - **Live**: At Pompeii: Pink Floyd");
    }

    #[test]
    fn test_render_document() {
        let mut registry = Registry::new();
        registry.insert(Entry::new(["The Wall", "Pink Floyd"]));
        registry.insert(Entry::new(["Ten", "Pearl Jam"]));
        registry.insert(Entry::new(["1984", "Van Halen"]));
        registry.group_mut(GroupKey::CATCH_ALL);

        let text = render(&mut registry);
        let expected = format!(
            "# Albums\n## Note: \n{}\n\n### T\n - **Ten**: Pearl Jam\n - **The Wall**: Pink Floyd\n### 1\n - **1984**: Van Halen\n### ~\n",
            preamble::USAGE
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_registry_is_preamble_only() {
        let text = render(&mut Registry::new());
        assert!(text.starts_with("# Albums\n"));
        assert!(text.ends_with("\n\n"));
        assert!(!text.contains(markers::HEADER));
    }
}
