//! Output naming strategies and the emission plan
//!
//! Flat mode writes one file per valid combination named by its per-slot
//! biome indices. Bucketed mode walks the prefixes in order and writes one
//! file per (prefix, combination touching that prefix), numbering every
//! emission with a global zero-padded counter.

use crate::combination::Combination;
use crate::io::configuration::{BUCKET_COUNTER_WIDTH, NAME_SEPARATOR, OUTPUT_EXTENSION};
use crate::parts::PartCatalog;

/// How combined tiles are named and grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NamingMode {
    /// `1_2_1_2_1_1.png`, one file per valid combination
    #[default]
    Flat,
    /// `0000_GR_1_2_1_2_1_1.png`, one file per touched biome
    Bucketed,
}

/// One planned output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission<'a> {
    /// Position in the plan, 0-based and gapless
    pub sequence: usize,
    /// Biome bucket being walked (bucketed mode only)
    pub bucket: Option<&'a str>,
    /// Parts to composite
    pub combination: Combination<'a>,
    /// Output file name, extension included
    pub file_name: String,
}

/// Per-slot biome indices joined by underscores
///
/// Prefixes missing from the catalog encode as `0`.
pub fn index_sequence(catalog: &PartCatalog, combination: &Combination<'_>) -> String {
    combination
        .prefixes()
        .iter()
        .map(|prefix| {
            catalog
                .prefix_index(prefix)
                .unwrap_or_default()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}

/// File name used in flat mode
pub fn flat_file_name(catalog: &PartCatalog, combination: &Combination<'_>) -> String {
    format!("{}.{OUTPUT_EXTENSION}", index_sequence(catalog, combination))
}

/// File name used in bucketed mode
pub fn bucketed_file_name(
    catalog: &PartCatalog,
    sequence: usize,
    bucket: &str,
    combination: &Combination<'_>,
) -> String {
    format!(
        "{sequence:0width$}{NAME_SEPARATOR}{bucket}{NAME_SEPARATOR}{}.{OUTPUT_EXTENSION}",
        index_sequence(catalog, combination),
        width = BUCKET_COUNTER_WIDTH,
    )
}

impl NamingMode {
    /// Lazily plan every emission for `catalog`
    ///
    /// The plan re-enumerates combinations from scratch on every call and
    /// holds no images, so it can be walked once to count and again to
    /// render.
    pub fn plan<'a>(self, catalog: &'a PartCatalog) -> Box<dyn Iterator<Item = Emission<'a>> + 'a> {
        match self {
            Self::Flat => Box::new(catalog.valid_combinations().enumerate().map(
                move |(sequence, combination)| Emission {
                    sequence,
                    bucket: None,
                    file_name: flat_file_name(catalog, &combination),
                    combination,
                },
            )),
            Self::Bucketed => Box::new(
                catalog
                    .prefixes()
                    .iter()
                    .flat_map(move |bucket| {
                        catalog
                            .valid_combinations()
                            .filter(move |combination| combination.touches(bucket))
                            .map(move |combination| (bucket.as_str(), combination))
                    })
                    .enumerate()
                    .map(move |(sequence, (bucket, combination))| Emission {
                        sequence,
                        bucket: Some(bucket),
                        file_name: bucketed_file_name(catalog, sequence, bucket, &combination),
                        combination,
                    }),
            ),
        }
    }
}
