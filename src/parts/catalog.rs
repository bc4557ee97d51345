//! Part folder scanning, slot grouping and biome prefix indexing

use crate::combination::enumeration::{Combination, Combinations};
use crate::combination::filter::is_valid_combination;
use crate::io::configuration::SLOT_COUNT;
use crate::io::error::Result;
use crate::io::image::list_files;
use crate::parts::name::{PartName, PartNameError};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// Parts of a tile set grouped by slot, with the sorted biome prefix index
///
/// Slot groups keep listing order. Prefix indices are 1-based and follow the
/// lexicographic order of the distinct prefixes among accepted parts.
#[derive(Debug, Clone, Default)]
pub struct PartCatalog {
    slots: [Vec<PartName>; SLOT_COUNT],
    prefixes: Vec<String>,
    rejected: Vec<PartNameError>,
}

impl PartCatalog {
    /// Scan `dir` and build the catalog from its file names
    ///
    /// Files are not opened. Names that do not parse as parts are logged and
    /// recorded as rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read
    pub fn load(dir: &Path) -> Result<Self> {
        let names = list_files(dir)?;
        let catalog = Self::from_file_names(&names);
        debug!(
            dir = %dir.display(),
            parts = catalog.part_count(),
            rejected = catalog.rejected.len(),
            "scanned part folder"
        );
        Ok(catalog)
    }

    /// Build the catalog from file names in listing order
    pub fn from_file_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut catalog = Self::default();
        let mut prefixes = BTreeSet::new();

        for name in names {
            match PartName::parse(name.as_ref()) {
                Ok(part) => {
                    let index = part.slot() - 1;
                    if let Some(group) = catalog.slots.get_mut(index) {
                        prefixes.insert(part.prefix().to_string());
                        group.push(part);
                    }
                }
                Err(err) => {
                    warn!("skipping {err}");
                    catalog.rejected.push(err);
                }
            }
        }

        catalog.prefixes = prefixes.into_iter().collect();
        catalog
    }

    /// Parts for a 1-based slot, empty when the slot is out of range
    pub fn slot(&self, slot: usize) -> &[PartName] {
        slot.checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All slot groups, slot 1 first
    pub fn slot_groups(&self) -> [&[PartName]; SLOT_COUNT] {
        self.slots.each_ref().map(Vec::as_slice)
    }

    /// Distinct biome prefixes in lexicographic order
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// 1-based index of `prefix`, if it was observed
    pub fn prefix_index(&self, prefix: &str) -> Option<usize> {
        self.prefixes
            .binary_search_by(|candidate| candidate.as_str().cmp(prefix))
            .ok()
            .map(|index| index + 1)
    }

    /// Names rejected while building the catalog
    pub fn rejected(&self) -> &[PartNameError] {
        &self.rejected
    }

    /// Number of accepted parts over all slots
    pub fn part_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Fresh lazy Cartesian product over the slot groups
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(self.slot_groups())
    }

    /// Size of the unfiltered product
    pub fn combination_count(&self) -> usize {
        self.combinations().len()
    }

    /// Combinations passing the adjacency filter, in enumeration order
    pub fn valid_combinations(&self) -> impl Iterator<Item = Combination<'_>> + '_ {
        self.combinations().filter(is_valid_combination)
    }
}
