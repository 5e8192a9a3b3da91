//! Gene records and multi-value field normalization
//!
//! The reference store keeps aliases and cross-references as comma-joined
//! strings; these are split into ordered lists on read. Entrez tokens that
//! fail integer parsing are dropped without signaling.

use crate::species::Taxonomy;
use serde::{Deserialize, Serialize};

/// A normalized gene record
///
/// The taxonomy is assigned by the resolver from the species table that was
/// queried, never read from the row itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    #[serde(flatten)]
    pub taxonomy: Taxonomy,
    pub id: String,
    pub symbol: String,
    pub aliases: Vec<String>,
    pub entrez: Vec<u64>,
    pub refseq: Vec<String>,
    pub ensembl: Vec<String>,
}

/// Genes found by cross-species lookup of a single search term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// The original, un-wildcarded search term
    #[serde(rename = "id")]
    pub search: String,
    pub genes: Vec<Gene>,
}

/// Aggregate envelope for batch conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResults {
    pub from: Taxonomy,
    pub to: Taxonomy,
    pub conversions: Vec<Conversion>,
}

/// Same-species lookup result shape for transport layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneResult {
    pub id: String,
    pub genes: Vec<Gene>,
}

impl GeneResult {
    pub fn new(id: impl Into<String>, genes: Vec<Gene>) -> Self {
        Self {
            id: id.into(),
            genes,
        }
    }
}

/// Split a comma-joined column into its tokens, dropping empty tokens so an
/// empty column yields an empty list.
pub(crate) fn split_field(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a comma-joined column of Entrez IDs. Non-numeric tokens are
/// dropped, not reported.
pub(crate) fn parse_entrez(raw: &str) -> Vec<u64> {
    raw.split(',')
        .filter_map(|token| token.parse::<u64>().ok())
        .collect()
}
