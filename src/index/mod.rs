//! Immutable gene coordinate index.

mod build;

pub use build::{build_gene_index, load_gene_index};

use ahash::AHashMap;

use crate::event::PackedEvent;

/// Pre-sorted gene coordinate events plus gene-id lookup, one entry per
/// contig. Built once from a gene-coordinates stream and shared read-only
/// across every chunk that `ChunkMapper` processes.
#[derive(Debug, Clone, Default)]
pub struct GeneIndex {
    /// Sorted concatenation of gene start/end events, per contig.
    pub coords: AHashMap<String, Vec<PackedEvent>>,
    /// Gene identifiers, indexed by the `idx` field of events in `coords`.
    pub ids: AHashMap<String, Vec<String>>,
    /// Set if any gene_id appears more than once, on one contig or across
    /// contigs. Not used by the sweep; exposed for callers to inspect.
    pub has_duplicate_gene_ids: bool,
}

impl GeneIndex {
    /// Number of contigs carrying at least one gene.
    pub fn contig_count(&self) -> usize {
        self.coords.len()
    }

    /// Total number of genes across all contigs.
    pub fn gene_count(&self) -> usize {
        self.ids.values().map(|v| v.len()).sum()
    }
}
