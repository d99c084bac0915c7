//! Dictionary manager
//!
//! `DictionaryManager` is the capability set callers program against;
//! `InMemoryManager` keeps every dictionary as a plain vector and scans it
//! linearly.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::export::export_entries;
use crate::types::{DictionaryEntry, DictionaryType, Outcome};

/// Operations on a set of directional dictionaries
pub trait DictionaryManager {
    /// Acknowledge a dictionary. Existing entries are left alone.
    fn create_dictionary(&mut self, ty: DictionaryType) -> Outcome;

    /// Append an entry, even if the word is already present
    fn add_word(&mut self, ty: DictionaryType, entry: DictionaryEntry) -> Outcome;

    /// Remove the first entry for `word` and append `new_entry` at the end
    fn replace_word(&mut self, ty: DictionaryType, word: &str, new_entry: DictionaryEntry)
        -> Outcome;

    /// Remove the first entry for `word`
    fn delete_word(&mut self, ty: DictionaryType, word: &str) -> Outcome;

    /// Translations of every entry for `word`, in entry order
    fn search_translation(&self, ty: DictionaryType, word: &str) -> Vec<String>;

    /// Write the dictionary to `path` as text blocks, overwriting the file
    fn export_to_file(&self, ty: DictionaryType, path: &Path) -> Outcome;
}

/// In-memory manager holding one entry vector per dictionary type
#[derive(Debug, Clone)]
pub struct InMemoryManager {
    dictionaries: HashMap<DictionaryType, Vec<DictionaryEntry>>,
}

impl InMemoryManager {
    /// Create a manager with an empty dictionary for every type
    pub fn new() -> Self {
        let dictionaries = DictionaryType::ALL
            .into_iter()
            .map(|ty| (ty, Vec::new()))
            .collect();
        InMemoryManager { dictionaries }
    }

    /// Current entries of a dictionary, in sequence order
    pub fn entries(&self, ty: DictionaryType) -> &[DictionaryEntry] {
        self.dictionaries
            .get(&ty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn entries_mut(&mut self, ty: DictionaryType) -> &mut Vec<DictionaryEntry> {
        self.dictionaries.entry(ty).or_default()
    }

    fn position_of(&self, ty: DictionaryType, word: &str) -> Option<usize> {
        self.entries(ty).iter().position(|e| e.word == word)
    }
}

impl Default for InMemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryManager for InMemoryManager {
    fn create_dictionary(&mut self, ty: DictionaryType) -> Outcome {
        debug!(dictionary = %ty, entries = self.entries(ty).len(), "dictionary created");
        Outcome::Created { dictionary: ty }
    }

    fn add_word(&mut self, ty: DictionaryType, entry: DictionaryEntry) -> Outcome {
        let word = entry.word.clone();
        let entries = self.entries_mut(ty);
        entries.push(entry);
        debug!(dictionary = %ty, word = %word, entries = entries.len(), "word added");
        Outcome::Added { word }
    }

    fn replace_word(
        &mut self,
        ty: DictionaryType,
        word: &str,
        new_entry: DictionaryEntry,
    ) -> Outcome {
        let Some(index) = self.position_of(ty, word) else {
            warn!(dictionary = %ty, word, "replace target not found");
            return Outcome::NotFound {
                word: word.to_string(),
            };
        };

        let new = new_entry.word.clone();
        let entries = self.entries_mut(ty);
        entries.remove(index);
        entries.push(new_entry);
        debug!(dictionary = %ty, word, new = %new, "word replaced");
        Outcome::Replaced {
            old: word.to_string(),
            new,
        }
    }

    fn delete_word(&mut self, ty: DictionaryType, word: &str) -> Outcome {
        let Some(index) = self.position_of(ty, word) else {
            warn!(dictionary = %ty, word, "delete target not found");
            return Outcome::NotFound {
                word: word.to_string(),
            };
        };

        let entries = self.entries_mut(ty);
        entries.remove(index);
        debug!(dictionary = %ty, word, entries = entries.len(), "word removed");
        Outcome::Removed {
            word: word.to_string(),
        }
    }

    fn search_translation(&self, ty: DictionaryType, word: &str) -> Vec<String> {
        self.entries(ty)
            .iter()
            .filter(|e| e.word == word)
            .flat_map(|e| e.translations.iter().cloned())
            .collect()
    }

    fn export_to_file(&self, ty: DictionaryType, path: &Path) -> Outcome {
        let entries = self.entries(ty);
        match export_entries(path, entries) {
            Ok(()) => {
                info!(dictionary = %ty, path = %path.display(), entries = entries.len(), "dictionary exported");
                Outcome::Exported {
                    path: path.to_path_buf(),
                }
            }
            Err(err) => {
                let message = err.to_string();
                error!(dictionary = %ty, path = %path.display(), "export failed: {}", message);
                Outcome::ExportFailed {
                    path: path.to_path_buf(),
                    message,
                }
            }
        }
    }
}
