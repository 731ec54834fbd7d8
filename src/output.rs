//! Chunk result -> TSV writer.
//!
//! One line per query, subjects written as `gene_id:count` pairs sorted by
//! count descending then gene_id ascending. A chunk's gene set per read has
//! no duplicate genes (it's a set), so count is always 1 here; the shape is
//! kept because downstream multi-chunk aggregation merges on it.

use std::io::Write;

use anyhow::Result;

use crate::mapper::ChunkResult;

/// Write one chunk's result as `read_id<TAB>gene_id:count<TAB>...` lines.
///
/// Gene ids within a read are sorted by count (always 1 within one chunk)
/// then alphabetically.
pub fn write_chunk<W: Write>(writer: &mut W, result: &ChunkResult) -> Result<()> {
    for (query, genes) in result.queries.iter().zip(result.subjects.iter()) {
        let mut sorted: Vec<&String> = genes.iter().collect();
        sorted.sort_unstable();

        write!(writer, "{}", query)?;
        for gene in sorted {
            write!(writer, "\t{}:1", gene)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
