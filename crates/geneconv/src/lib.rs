//! GeneConv Library
//!
//! Resolves gene identifiers between human and mouse by querying a
//! read-only SQLite reference database of gene symbols, aliases, and
//! cross-references.
//!
//! # Overview
//!
//! - **Same-species lookup**: resolve a symbol or alias to the gene records
//!   of one species ([`GeneConvDb::gene`])
//! - **Cross-species conversion**: map a term through the ortholog mapping
//!   table to the other species ([`GeneConvDb::convert`])
//! - **Batch conversion**: one [`Conversion`] per input term, wrapped in a
//!   [`ConversionResults`] envelope ([`GeneConvDb::convert_all`])
//!
//! Matching is either exact (case-insensitive equality) or fuzzy
//! (case-insensitive substring). The store is read-only; this crate owns no
//! schema creation, population, or transport concerns.
//!
//! # Example
//!
//! ```rust,ignore
//! use geneconv::{GeneConvDb, Species};
//!
//! let db = GeneConvDb::open("data/genes.db")?;
//! let conversion = db.convert("TP53", Species::Human, Species::Mouse, true)?;
//! for gene in &conversion.genes {
//!     println!("{} -> {}", conversion.search, gene.symbol);
//! }
//! ```

pub mod db;
pub mod error;
pub mod genes;
pub mod logging;
pub mod species;

// Re-export commonly used types
pub use db::GeneConvDb;
pub use error::{GeneConvError, Result};
pub use genes::{Conversion, ConversionResults, Gene, GeneResult};
pub use species::{Species, Taxonomy};
