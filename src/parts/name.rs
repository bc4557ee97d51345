//! Part filename parsing
//!
//! A part file is named `<PREFIX><SLOT>...` where the first two characters
//! are the biome code and the third is the layering slot digit.

use crate::io::configuration::{PART_EXTENSIONS, PREFIX_LEN, SLOT_COUNT, has_extension};
use std::fmt;

/// Why a file in the parts folder was not accepted as a part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartNameError {
    /// Name does not follow the `<PREFIX><SLOT>` convention
    Malformed {
        /// Offending file name
        name: String,
        /// What is wrong with it
        reason: &'static str,
    },
    /// Extension is not a recognized part image extension
    UnsupportedExtension {
        /// Offending file name
        name: String,
    },
}

impl fmt::Display for PartNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { name, reason } => write!(f, "Malformed part name '{name}': {reason}"),
            Self::UnsupportedExtension { name } => {
                write!(f, "Unsupported part extension for '{name}'")
            }
        }
    }
}

impl std::error::Error for PartNameError {}

/// A parsed part filename
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartName {
    file_name: String,
    prefix: String,
    slot: usize,
}

impl PartName {
    /// Parse a file name into its biome prefix and slot
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The extension is not one of the part extensions
    /// - The name is shorter than prefix plus slot digit
    /// - The slot character is not a digit between 1 and the slot count
    pub fn parse(file_name: &str) -> Result<Self, PartNameError> {
        if !has_extension(file_name, PART_EXTENSIONS) {
            return Err(PartNameError::UnsupportedExtension {
                name: file_name.to_string(),
            });
        }

        let mut chars = file_name.chars();
        let prefix: String = chars.by_ref().take(PREFIX_LEN).collect();
        let slot_char = chars.next().filter(|_| prefix.chars().count() == PREFIX_LEN);

        let Some(slot_char) = slot_char else {
            return Err(PartNameError::Malformed {
                name: file_name.to_string(),
                reason: "shorter than prefix and slot digit",
            });
        };

        let slot = slot_char
            .to_digit(10)
            .map(|digit| digit as usize)
            .filter(|digit| (1..=SLOT_COUNT).contains(digit))
            .ok_or_else(|| PartNameError::Malformed {
                name: file_name.to_string(),
                reason: "slot character is not a digit from 1 to 6",
            })?;

        Ok(Self {
            file_name: file_name.to_string(),
            prefix,
            slot,
        })
    }

    /// Full file name including extension
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Biome prefix (first two characters)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Layering slot, 1-based
    pub const fn slot(&self) -> usize {
        self.slot
    }
}
