//! Error types for the ordmap core.
//!
//! The core surfaces a small, matchable set of fatal conditions; ad hoc
//! contextual errors at the CLI/ingestion boundary use `anyhow::Context`
//! instead.

use thiserror::Error;

/// Fatal conditions raised while building a [`crate::index::GeneIndex`].
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid coordinate line: {0}")]
    InvalidCoordinateLine(String),

    #[error("gene record before any contig header")]
    OrphanGeneRecord,

    #[error("more than {0} genes on contig {1:?}")]
    GeneIdIndexOverflow(u32, String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fatal conditions raised while ingesting alignments into a [`crate::mapper::ChunkMapper`].
#[derive(Debug, Error)]
pub enum MapError {
    #[error("more than {0} read alignments in one chunk")]
    ReadIdIndexOverflow(u32),

    #[error("effective overlap length {0} exceeds the 17-bit field (max {1})")]
    EffectiveLengthOverflow(u32, u32),
}
