//! Core data types for the dictionary manager

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::DictError;

/// Direction of a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryType {
    EnglishToRussian,
    RussianToEnglish,
}

impl DictionaryType {
    /// Every supported direction, in declaration order
    pub const ALL: [DictionaryType; 2] = [
        DictionaryType::EnglishToRussian,
        DictionaryType::RussianToEnglish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryType::EnglishToRussian => "EnglishToRussian",
            DictionaryType::RussianToEnglish => "RussianToEnglish",
        }
    }

    /// Short language-pair code, e.g. `en-ru`
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryType::EnglishToRussian => "en-ru",
            DictionaryType::RussianToEnglish => "ru-en",
        }
    }
}

impl fmt::Display for DictionaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryType {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DictionaryType::ALL
            .into_iter()
            .find(|ty| {
                ty.as_str().eq_ignore_ascii_case(wanted) || ty.code().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DictError::UnknownDictionaryType(s.to_string()))
    }
}

/// A word together with its translations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictionaryEntry {
    /// Headword, compared exactly (case-sensitive)
    pub word: String,
    /// Translations in the order they were given; duplicates allowed
    pub translations: Vec<String>,
}

impl DictionaryEntry {
    pub fn new<W, I, T>(word: W, translations: I) -> Self
    where
        W: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        DictionaryEntry {
            word: word.into(),
            translations: translations.into_iter().map(Into::into).collect(),
        }
    }
}

/// What a manager operation did.
///
/// Operations never fail towards the caller; a missing word or a failed
/// export is reported here instead. `Display` gives a human-readable line.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created {
        dictionary: DictionaryType,
    },
    Added {
        word: String,
    },
    Replaced {
        old: String,
        new: String,
    },
    Removed {
        word: String,
    },
    NotFound {
        word: String,
    },
    Exported {
        path: PathBuf,
    },
    ExportFailed {
        path: PathBuf,
        /// Message of the underlying I/O error
        message: String,
    },
}

impl Outcome {
    /// False for `NotFound` and `ExportFailed`
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::NotFound { .. } | Outcome::ExportFailed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { dictionary } => {
                write!(f, "Dictionary of type {} created.", dictionary)
            }
            Outcome::Added { word } => write!(f, "Word '{}' added to the dictionary.", word),
            Outcome::Replaced { old, new } => {
                write!(f, "Word '{}' replaced with '{}' in the dictionary.", old, new)
            }
            Outcome::Removed { word } => {
                write!(f, "Word '{}' removed from the dictionary.", word)
            }
            Outcome::NotFound { word } => {
                write!(f, "Word '{}' not found in the dictionary.", word)
            }
            Outcome::Exported { path } => write!(
                f,
                "Dictionary exported to '{}' successfully.",
                path.display()
            ),
            Outcome::ExportFailed { message, .. } => {
                write!(f, "Error exporting dictionary: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_type_from_str() {
        assert_eq!(
            "EnglishToRussian".parse::<DictionaryType>().unwrap(),
            DictionaryType::EnglishToRussian
        );
        assert_eq!(
            "ru-en".parse::<DictionaryType>().unwrap(),
            DictionaryType::RussianToEnglish
        );
        assert_eq!(
            " EN-RU ".parse::<DictionaryType>().unwrap(),
            DictionaryType::EnglishToRussian
        );
    }

    #[test]
    fn test_dictionary_type_from_str_unknown() {
        let err = "en-de".parse::<DictionaryType>().unwrap_err();
        assert!(matches!(err, DictError::UnknownDictionaryType(ref s) if s == "en-de"));
        assert_eq!(err.to_string(), "Unknown dictionary type: en-de");
    }

    #[test]
    fn test_dictionary_type_display() {
        assert_eq!(DictionaryType::EnglishToRussian.to_string(), "EnglishToRussian");
        assert_eq!(DictionaryType::RussianToEnglish.to_string(), "RussianToEnglish");
    }

    #[test]
    fn test_entry_new() {
        let entry = DictionaryEntry::new("hello", ["привіт", "добрий день"]);
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.translations, vec!["привіт", "добрий день"]);
    }

    #[test]
    fn test_outcome_messages() {
        let created = Outcome::Created {
            dictionary: DictionaryType::EnglishToRussian,
        };
        assert_eq!(created.to_string(), "Dictionary of type EnglishToRussian created.");

        let replaced = Outcome::Replaced {
            old: "world".into(),
            new: "planet".into(),
        };
        assert_eq!(
            replaced.to_string(),
            "Word 'world' replaced with 'planet' in the dictionary."
        );

        let exported = Outcome::Exported {
            path: PathBuf::from("dictionary.txt"),
        };
        assert_eq!(
            exported.to_string(),
            "Dictionary exported to 'dictionary.txt' successfully."
        );

        let failed = Outcome::ExportFailed {
            path: PathBuf::from("x"),
            message: "denied".into(),
        };
        assert_eq!(failed.to_string(), "Error exporting dictionary: denied");
    }

    #[test]
    fn test_outcome_is_success() {
        assert!(Outcome::Added { word: "a".into() }.is_success());
        assert!(!Outcome::NotFound { word: "a".into() }.is_success());
        assert!(!Outcome::ExportFailed {
            path: PathBuf::new(),
            message: String::new()
        }
        .is_success());
    }
}
