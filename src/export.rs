//! Plain-text export of dictionary entries
//!
//! Each entry becomes a three-line block:
//!
//! ```text
//! Word: <word>
//! Translations: <t1>, <t2>, ...
//! ----
//! ```
//!
//! Nothing is escaped, so a newline inside a word or translation breaks the
//! block structure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::DictionaryEntry;

/// Separator between translations
pub(crate) const TRANSLATION_SEPARATOR: &str = ", ";

/// Line written after every entry, including the last
pub(crate) const BLOCK_TERMINATOR: &str = "----";

/// Write entries as text blocks to any writer
pub(crate) fn write_entries<W: Write>(
    writer: &mut W,
    entries: &[DictionaryEntry],
) -> Result<()> {
    for entry in entries {
        writeln!(writer, "Word: {}", entry.word)?;
        writeln!(
            writer,
            "Translations: {}",
            entry.translations.join(TRANSLATION_SEPARATOR)
        )?;
        writeln!(writer, "{}", BLOCK_TERMINATOR)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the entries into it.
///
/// The file is closed when the writer goes out of scope, on success and on
/// error alike. Whatever was written before an error stays on disk.
pub(crate) fn export_entries(path: &Path, entries: &[DictionaryEntry]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_entries(&mut writer, entries)?;
    writer.flush()?;
    Ok(())
}
