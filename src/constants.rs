//! Application constants.
//!
//! Centralizes the document markers and defaults shared by the parser and renderer.

/// Markdown structure of the catalogue document.
pub mod markers {
    /// Prefix of a section header line (`### A`).
    pub const HEADER: &str = "### ";

    /// Prefix of an already formatted album row (` - **Title**: Artist`).
    pub const ALBUM: &str = " - ";

    /// Prefix of any other Markdown heading or comment line.
    pub const COMMENT: &str = "#";

    /// Field delimiter used when splitting entries.
    pub const DELIMITER: char = ':';

    /// Field separator used when rendering entries.
    pub const RENDERED_DELIMITER: &str = ": ";

    /// Emphasis wrapped around the primary field.
    pub const BOLD: &str = "**";

    /// Group key for entries that do not start with an ASCII letter or digit.
    pub const CATCH_ALL: char = '~';
}

/// Fixed text emitted at the top of every rendered document.
pub mod preamble {
    /// Document title line.
    pub const TITLE: &str = "# Albums";

    /// Heading of the usage note.
    pub const NOTE_HEADING: &str = "## Note: ";

    /// Usage note shown to people editing the document by hand.
    pub const USAGE: &str = "If you want to add any album, just add it in the following syntax: \
                             **\\<ALBUM_NAME\\>: \\<ARTIST\\>** and run `organize-albums`";

    /// Opening words shared by every version of the usage note, including
    /// notes written by older releases with different wording.
    pub const USAGE_PREFIX: &str = "If you want to add any album";

    /// All preamble lines in emission order. A blank line follows them.
    pub const LINES: [&str; 3] = [TITLE, NOTE_HEADING, USAGE];
}

/// Defaults used when no configuration overrides them.
pub mod defaults {
    /// Document rewritten in place, relative to the working directory.
    pub const DOCUMENT: &str = "README.md";

    /// Artist name used to detect artist-first documents.
    pub const PROBE_ARTIST: &str = "Pink Floyd";
}
