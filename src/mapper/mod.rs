//! Stateful, chunk-scoped buffering, flush (merge + sweep), and emit.

pub mod genelen;
pub mod naive;
pub mod sweep;

pub use genelen::calc_gene_lengths;

use ahash::{AHashMap, AHashSet};

use crate::error::MapError;
use crate::event::{PackedEvent, MAX_IDX, MAX_LEN};
use crate::index::GeneIndex;
use crate::parser::{AlignmentRecord, ParseError};
use crate::Config;

use naive::naive_scan;
use sweep::{sweep, sweep_disjoint};

/// One chunk's result: parallel sequences, `queries[i]` paired with
/// `subjects[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkResult {
    pub queries: Vec<String>,
    pub subjects: Vec<AHashSet<String>>,
}

/// Per-contig, per-flush instrumentation. Never collected unless a caller
/// opts in via [`ChunkMapper::set_stats_hook`]; no file is ever opened by
/// this crate on its own.
pub struct FlushStats {
    pub contig: String,
    pub read_event_count: usize,
}

/// Stateful chunk buffer and flush orchestrator. Holds a shared,
/// read-only [`GeneIndex`] and owns everything that is chunk-local.
pub struct ChunkMapper<'g> {
    index: &'g GeneIndex,
    config: Config,
    rids: Vec<String>,
    locmap: AHashMap<String, Vec<PackedEvent>>,
    last_query: Option<String>,
    records_since_flush: usize,
    warned_length_overflow: bool,
    stats_hook: Option<Box<dyn FnMut(&FlushStats) + Send>>,
}

impl<'g> ChunkMapper<'g> {
    pub fn new(index: &'g GeneIndex, config: Config) -> Self {
        ChunkMapper {
            index,
            config,
            rids: Vec::new(),
            locmap: AHashMap::default(),
            last_query: None,
            records_since_flush: 0,
            warned_length_overflow: false,
            stats_hook: None,
        }
    }

    /// Install (or clear) a debug hook invoked once per contig per flush.
    /// Not wired to any I/O by this crate; a caller wanting the legacy
    /// per-contig counts supplies their own sink.
    pub fn set_stats_hook(&mut self, hook: Option<Box<dyn FnMut(&FlushStats) + Send>>) {
        self.stats_hook = hook;
    }

    /// Ingest one parsed alignment record. Returns `Ok(Some(result))`
    /// exactly when ingesting `rec` crosses a chunk boundary: the pending
    /// chunk is flushed *before* `rec` is buffered,
    /// so `rec` becomes the first record of the next chunk.
    pub fn ingest(&mut self, rec: &AlignmentRecord) -> Result<Option<ChunkResult>, MapError> {
        if rec.length == 0 {
            return Ok(None);
        }

        let query_changed = self.last_query.as_deref() != Some(rec.query.as_str());
        let mut flushed = None;
        if query_changed && self.records_since_flush >= self.config.chunk_size && !self.rids.is_empty() {
            flushed = Some(self.flush());
        }

        if self.rids.len() as u64 > MAX_IDX as u64 {
            return Err(MapError::ReadIdIndexOverflow(MAX_IDX));
        }
        let idx = self.rids.len() as u32;
        self.rids.push(rec.query.clone());

        let begin = rec.begin.min(rec.end);
        let end = rec.begin.max(rec.end);

        let raw_l = (rec.length as f64 * self.config.overlap_threshold).ceil() as u64;
        let l = if raw_l > MAX_LEN as u64 {
            if self.config.strict_length_overflow {
                return Err(MapError::EffectiveLengthOverflow(raw_l as u32, MAX_LEN));
            }
            if !self.warned_length_overflow {
                log::warn!(
                    "effective overlap length {} for query {:?} exceeds the 17-bit field, clamping to {}",
                    raw_l,
                    rec.query,
                    MAX_LEN
                );
                self.warned_length_overflow = true;
            }
            MAX_LEN
        } else {
            raw_l as u32
        };

        let events = self.locmap.entry(rec.subject.clone()).or_default();
        events.push(PackedEvent::read_start(begin, l, idx));
        events.push(PackedEvent::read_end(end, idx));

        self.last_query = Some(rec.query.clone());
        self.records_since_flush += 1;

        Ok(flushed)
    }

    /// Flush any buffered alignments. Call once ingestion is complete so
    /// no trailing reads are dropped.
    pub fn finish(&mut self) -> ChunkResult {
        self.flush()
    }

    fn flush(&mut self) -> ChunkResult {
        let mut result: AHashMap<String, AHashSet<String>> = AHashMap::default();

        for (contig, read_events) in self.locmap.drain() {
            let Some(gene_events) = self.index.coords.get(&contig) else {
                continue;
            };

            if let Some(hook) = self.stats_hook.as_mut() {
                hook(&FlushStats {
                    contig: contig.clone(),
                    read_event_count: read_events.len(),
                });
            }

            let pairs = if read_events.len() <= self.config.naive_cutoff {
                naive_scan(gene_events, &read_events)
            } else if self.config.assume_disjoint_genes {
                sweep_disjoint(gene_events, &read_events)
            } else {
                sweep(gene_events, &read_events)
            };

            let gene_ids = &self.index.ids[&contig];
            for (read_idx, gene_idx) in pairs {
                let read_id = &self.rids[read_idx as usize];
                let gene_id = &gene_ids[gene_idx as usize];
                let emitted = if self.config.prefix_genes {
                    format!("{}_{}", contig, gene_id)
                } else {
                    gene_id.clone()
                };
                result.entry(read_id.clone()).or_default().insert(emitted);
            }
        }

        self.rids.clear();
        self.records_since_flush = 0;
        self.last_query = None;

        let (queries, subjects) = result.into_iter().unzip();
        ChunkResult { queries, subjects }
    }

    /// Drive the mapper over an iterator of (possibly unparseable) records,
    /// invoking `on_chunk` at every flush boundary plus once more at the
    /// end. Unparseable items are dropped, matching the contract that the
    /// core silently ignores malformed alignment lines.
    pub fn run<I, F>(&mut self, records: I, mut on_chunk: F) -> Result<(), MapError>
    where
        I: IntoIterator<Item = Result<AlignmentRecord, ParseError>>,
        F: FnMut(ChunkResult),
    {
        for item in records {
            let Ok(rec) = item else { continue };
            if let Some(result) = self.ingest(&rec)? {
                on_chunk(result);
            }
        }
        on_chunk(self.finish());
        Ok(())
    }
}
