//! ordmap - ordinal read-to-gene mapping core for metagenomic classification.
//!
//! Given a catalog of gene intervals on reference contigs and a stream of
//! short-read alignments, this crate emits, per read, the set of genes it
//! overlaps by at least a configurable fraction of the alignment length.
//!
//! The hard part is a single linear coordinate sweep: genes and read
//! alignments are encoded into a flattened sequence of packed 64-bit events
//! ([`event::PackedEvent`]); one pass over the sorted events identifies
//! every qualifying `(read, gene)` pair.
//!
//! # Example
//!
//! ```ignore
//! use ordmap::config::Config;
//! use ordmap::index::load_gene_index;
//! use ordmap::mapper::ChunkMapper;
//! use ordmap::parser::parse_alignments;
//! use std::fs::File;
//! use std::io::BufReader;
//! use std::path::Path;
//!
//! let index = load_gene_index(Path::new("genes.coords"), false)?;
//! let config = Config::default();
//! let mut mapper = ChunkMapper::new(&index, config);
//! let reader = BufReader::new(File::open("alignments.tsv")?);
//! mapper.run(parse_alignments(reader), |chunk| {
//!     // consume chunk.queries / chunk.subjects
//! })?;
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod index;
pub mod mapper;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::{IndexError, MapError};
pub use event::PackedEvent;
pub use index::GeneIndex;
pub use mapper::{ChunkMapper, ChunkResult};
