//! Configuration and defaults for ordmap.
//!
//! A plain struct with a `Default` impl, built by the CLI from parsed
//! `clap` arguments.

/// Configuration for the ordinal read-to-gene mapping process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target number of alignment records per chunk. The boundary is only
    /// honored on a query change, so actual chunks are `>= chunk_size`.
    pub chunk_size: usize,
    /// Minimum fraction of the alignment length that must overlap a gene.
    pub overlap_threshold: f64,
    /// Prefix emitted gene ids with `contig_id + "_"`.
    pub prefix_genes: bool,
    /// Read-event count at or below which the naive algorithm is used.
    pub naive_cutoff: usize,
    /// Skip sorting gene coordinates at index build time (already sorted).
    pub presorted_coords: bool,
    /// Abort on effective-length overflow instead of clamping with a warning.
    pub strict_length_overflow: bool,
    /// Assume genes on every contig are mutually non-overlapping, enabling
    /// the scalar-`current_gene` fast path in the merged sweep.
    pub assume_disjoint_genes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chunk_size: 1_000_000,
            overlap_threshold: 0.8,
            prefix_genes: false,
            naive_cutoff: 16,
            presorted_coords: false,
            strict_length_overflow: false,
            assume_disjoint_genes: false,
        }
    }
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }
}
