//! Supported species and their NCBI taxonomy identifiers

use crate::error::GeneConvError;
use serde::{Deserialize, Serialize};

/// NCBI taxonomy identifier for Homo sapiens
pub const HUMAN_TAX_ID: u32 = 9606;

/// NCBI taxonomy identifier for Mus musculus
pub const MOUSE_TAX_ID: u32 = 10090;

/// The closed set of species the reference store covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Human,
    Mouse,
}

impl Species {
    /// NCBI taxonomy identifier for this species
    pub fn tax_id(self) -> u32 {
        match self {
            Species::Human => HUMAN_TAX_ID,
            Species::Mouse => MOUSE_TAX_ID,
        }
    }

    /// Lowercase species name as used in API payloads
    pub fn name(self) -> &'static str {
        match self {
            Species::Human => "human",
            Species::Mouse => "mouse",
        }
    }

    /// Taxonomy record for this species
    pub fn taxonomy(self) -> Taxonomy {
        Taxonomy {
            tax_id: self.tax_id(),
            species: self,
        }
    }
}

impl std::str::FromStr for Species {
    type Err = GeneConvError;

    /// Case-insensitive parse. Anything outside {human, mouse} is rejected
    /// rather than defaulted.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Species::Human),
            "mouse" => Ok(Species::Mouse),
            _ => Err(GeneConvError::UnknownSpecies(s.to_string())),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numeric species identifier plus human-readable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    pub tax_id: u32,
    pub species: Species,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_from_str() {
        assert_eq!("human".parse::<Species>().unwrap(), Species::Human);
        assert_eq!("HUMAN".parse::<Species>().unwrap(), Species::Human);
        assert_eq!("Mouse".parse::<Species>().unwrap(), Species::Mouse);
        assert!("rat".parse::<Species>().is_err());
        assert!("".parse::<Species>().is_err());
    }

    #[test]
    fn test_tax_ids() {
        assert_eq!(Species::Human.tax_id(), 9606);
        assert_eq!(Species::Mouse.tax_id(), 10090);
    }

    #[test]
    fn test_taxonomy_serialization() {
        let json = serde_json::to_value(Species::Human.taxonomy()).unwrap();
        assert_eq!(json["taxId"], 9606);
        assert_eq!(json["species"], "human");
    }
}
