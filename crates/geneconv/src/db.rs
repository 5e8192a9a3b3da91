//! SQLite-backed gene identifier resolver
//!
//! The reference store has, per species, a gene table (`human`, `mouse`) and
//! a term/alias lookup table (`human_terms`, `mouse_terms`), plus a
//! `conversion` table linking the two species' internal gene identifiers.
//! Each call selects one of eight fixed query templates based on the
//! (source, destination, match mode) tuple and maps every result row into a
//! normalized [`Gene`].
//!
//! Result order follows the store's natural scan order for the query; it is
//! not guaranteed.

use crate::error::{GeneConvError, Result};
use crate::genes::{parse_entrez, split_field, Conversion, ConversionResults, Gene};
use crate::species::Species;
use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::Path;
use tracing::debug;

const HUMAN_EXACT_SQL: &str = r#"
    SELECT human.gene_id, human.gene_symbol, human.aliases, human.entrez, human.refseq, human.ensembl
    FROM human_terms, human
    WHERE LOWER(human_terms.term) = LOWER(?1) AND human.gene_id = human_terms.gene_id
"#;

const HUMAN_FUZZY_SQL: &str = r#"
    SELECT human.gene_id, human.gene_symbol, human.aliases, human.entrez, human.refseq, human.ensembl
    FROM human_terms, human
    WHERE human_terms.term LIKE ?1 AND human.gene_id = human_terms.gene_id
"#;

const MOUSE_EXACT_SQL: &str = r#"
    SELECT mouse.gene_id, mouse.gene_symbol, mouse.aliases, mouse.entrez, mouse.refseq, mouse.ensembl
    FROM mouse_terms, mouse
    WHERE LOWER(mouse_terms.term) = LOWER(?1) AND mouse.gene_id = mouse_terms.gene_id
"#;

const MOUSE_FUZZY_SQL: &str = r#"
    SELECT mouse.gene_id, mouse.gene_symbol, mouse.aliases, mouse.entrez, mouse.refseq, mouse.ensembl
    FROM mouse_terms, mouse
    WHERE mouse_terms.term LIKE ?1 AND mouse.gene_id = mouse_terms.gene_id
"#;

const HUMAN_TO_MOUSE_EXACT_SQL: &str = r#"
    SELECT mouse.gene_id, mouse.gene_symbol, mouse.aliases, mouse.entrez, mouse.refseq, mouse.ensembl
    FROM human_terms, conversion, mouse
    WHERE LOWER(human_terms.term) = LOWER(?1)
      AND conversion.human_gene_id = human_terms.gene_id
      AND mouse.gene_id = conversion.mouse_gene_id
"#;

const HUMAN_TO_MOUSE_FUZZY_SQL: &str = r#"
    SELECT mouse.gene_id, mouse.gene_symbol, mouse.aliases, mouse.entrez, mouse.refseq, mouse.ensembl
    FROM human_terms, conversion, mouse
    WHERE human_terms.term LIKE ?1
      AND conversion.human_gene_id = human_terms.gene_id
      AND mouse.gene_id = conversion.mouse_gene_id
"#;

const MOUSE_TO_HUMAN_EXACT_SQL: &str = r#"
    SELECT human.gene_id, human.gene_symbol, human.aliases, human.entrez, human.refseq, human.ensembl
    FROM mouse_terms, conversion, human
    WHERE LOWER(mouse_terms.term) = LOWER(?1)
      AND conversion.mouse_gene_id = mouse_terms.gene_id
      AND human.gene_id = conversion.human_gene_id
"#;

const MOUSE_TO_HUMAN_FUZZY_SQL: &str = r#"
    SELECT human.gene_id, human.gene_symbol, human.aliases, human.entrez, human.refseq, human.ensembl
    FROM mouse_terms, conversion, human
    WHERE mouse_terms.term LIKE ?1
      AND conversion.mouse_gene_id = mouse_terms.gene_id
      AND human.gene_id = conversion.human_gene_id
"#;

/// Handle on the read-only gene conversion reference store
///
/// The connection is acquired once at construction and released on drop.
/// Each lookup is stateless and independent.
pub struct GeneConvDb {
    conn: Connection,
}

impl GeneConvDb {
    /// Open the reference store read-only.
    ///
    /// Fails immediately if the file cannot be opened; nothing is deferred
    /// to the first query.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            GeneConvError::store(format!("failed to open '{}': {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "opened gene conversion store");
        Ok(Self { conn })
    }

    /// Resolve a term against the destination species.
    ///
    /// Dispatch is explicit over the `(from, to)` pair: the two cross-species
    /// directions join through the `conversion` mapping table, while a
    /// same-species pair falls through to the plain lookup so the declared
    /// destination is never ignored. An absent match is not an error; the
    /// returned [`Conversion`] simply carries an empty gene list.
    pub fn convert(
        &self,
        search: &str,
        from: Species,
        to: Species,
        exact: bool,
    ) -> Result<Conversion> {
        let sql = query_for(from, to, exact);

        debug!(search = %search, %from, %to, exact, "cross-species conversion");

        let genes = self.query_genes(sql, search, exact, to)?;

        Ok(Conversion {
            search: search.to_string(),
            genes,
        })
    }

    /// Convert a batch of terms, one [`Conversion`] per term in input order.
    ///
    /// Fails fast on the first store error.
    pub fn convert_all<S: AsRef<str>>(
        &self,
        searches: &[S],
        from: Species,
        to: Species,
        exact: bool,
    ) -> Result<ConversionResults> {
        let mut conversions = Vec::with_capacity(searches.len());

        for search in searches {
            conversions.push(self.convert(search.as_ref(), from, to, exact)?);
        }

        Ok(ConversionResults {
            from: from.taxonomy(),
            to: to.taxonomy(),
            conversions,
        })
    }

    /// Resolve a term within a single species.
    pub fn gene(&self, search: &str, species: Species, exact: bool) -> Result<Vec<Gene>> {
        let sql = query_for(species, species, exact);

        debug!(search = %search, %species, exact, "same-species lookup");

        self.query_genes(sql, search, exact, species)
    }

    /// Run one query template and decode every row.
    ///
    /// Query execution and row decoding failures both propagate; the two
    /// public operations share this single policy.
    fn query_genes(
        &self,
        sql: &str,
        search: &str,
        exact: bool,
        taxonomy: Species,
    ) -> Result<Vec<Gene>> {
        let pattern = if exact {
            search.to_string()
        } else {
            format!("%{}%", search)
        };

        let mut stmt = self.conn.prepare(sql)?;
        let genes = stmt
            .query_map(params![pattern], |row| decode_gene(row, taxonomy))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(genes)
    }
}

/// Decode one result row into a [`Gene`] tagged with the queried species.
///
/// Column order is fixed by the query templates:
/// (gene_id, gene_symbol, aliases, entrez, refseq, ensembl).
fn decode_gene(row: &Row<'_>, taxonomy: Species) -> rusqlite::Result<Gene> {
    let aliases: String = row.get(2)?;
    let entrez: String = row.get(3)?;
    let refseq: String = row.get(4)?;
    let ensembl: String = row.get(5)?;

    Ok(Gene {
        taxonomy: taxonomy.taxonomy(),
        id: row.get(0)?,
        symbol: row.get(1)?,
        aliases: split_field(&aliases),
        entrez: parse_entrez(&entrez),
        refseq: split_field(&refseq),
        ensembl: split_field(&ensembl),
    })
}

/// Select the query template for a (source, destination, mode) tuple.
fn query_for(from: Species, to: Species, exact: bool) -> &'static str {
    match (from, to, exact) {
        (Species::Human, Species::Mouse, true) => HUMAN_TO_MOUSE_EXACT_SQL,
        (Species::Human, Species::Mouse, false) => HUMAN_TO_MOUSE_FUZZY_SQL,
        (Species::Mouse, Species::Human, true) => MOUSE_TO_HUMAN_EXACT_SQL,
        (Species::Mouse, Species::Human, false) => MOUSE_TO_HUMAN_FUZZY_SQL,
        (Species::Human, Species::Human, true) => HUMAN_EXACT_SQL,
        (Species::Human, Species::Human, false) => HUMAN_FUZZY_SQL,
        (Species::Mouse, Species::Mouse, true) => MOUSE_EXACT_SQL,
        (Species::Mouse, Species::Mouse, false) => MOUSE_FUZZY_SQL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_dispatch_covers_all_pairs() {
        // Cross pairs join through the conversion table, same pairs do not.
        assert!(query_for(Species::Human, Species::Mouse, true).contains("conversion"));
        assert!(query_for(Species::Mouse, Species::Human, false).contains("conversion"));
        assert!(!query_for(Species::Human, Species::Human, true).contains("conversion"));
        assert!(!query_for(Species::Mouse, Species::Mouse, false).contains("conversion"));
    }

    #[test]
    fn test_exact_templates_use_equality() {
        assert!(query_for(Species::Human, Species::Mouse, true).contains("LOWER"));
        assert!(query_for(Species::Human, Species::Mouse, false).contains("LIKE"));
    }
}
