//! In-memory bilingual dictionary manager
//!
//! Stores word entries per dictionary direction, supports exact-match
//! add/replace/delete/search, and exports a dictionary to a text file.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//! use bilingual_dict::{DictionaryEntry, DictionaryManager, DictionaryType, InMemoryManager};
//!
//! let mut manager = InMemoryManager::new();
//! let ty = DictionaryType::EnglishToRussian;
//!
//! println!("{}", manager.add_word(ty, DictionaryEntry::new("hello", ["привіт"])));
//! println!("{:?}", manager.search_translation(ty, "hello"));
//!
//! let outcome = manager.export_to_file(ty, Path::new("dictionary.txt"));
//! if !outcome.is_success() {
//!     eprintln!("{}", outcome);
//! }
//! ```

mod error;
mod export;
mod manager;
mod types;

pub use error::{DictError, Result};
pub use manager::{DictionaryManager, InMemoryManager};
pub use types::*;
