//! `organize-albums` - regroups a hand-maintained album list into a catalogue.
//!
//! Raw `Title: Artist` lines in a Markdown document are filed under per-letter
//! section headers, sorted, bolded, and written back in place. Sections from a
//! previous run are re-absorbed, so running twice changes nothing.

pub mod catalogue;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod organizer;
pub mod types;

pub use organizer::{organize_file, organize_text, Organized, RunSummary};
