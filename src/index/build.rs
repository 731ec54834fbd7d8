//! Streaming construction of a [`GeneIndex`] from a gene-coordinates file.
//!
//! Format: a line starting with `>` or `#` (but not `>>`/`##`) opens a
//! contig block; every following non-header, non-blank line is
//! `gene_id <TAB> begin <TAB> end` scoped to that contig. `>>`/`##` lines
//! are reserved super-group markers and ignored.

use std::io::BufRead;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;

use crate::error::IndexError;
use crate::event::{PackedEvent, MAX_IDX};
use crate::parser::util::create_buffered_reader;

use super::GeneIndex;

/// Parse a gene coordinates file from disk (transparently gzip-decompressed
/// if the path ends in `.gz`).
pub fn load_gene_index(path: &Path, presorted: bool) -> Result<GeneIndex, IndexError> {
    let file = std::fs::File::open(path)?;
    let reader = create_buffered_reader(file, path);
    build_gene_index(reader, presorted)
}

/// Parse a gene coordinates stream into a [`GeneIndex`].
///
/// When `presorted` is true, the per-contig event vectors are assumed to
/// already be sorted and the final sort pass is skipped.
pub fn build_gene_index<R: BufRead>(reader: R, presorted: bool) -> Result<GeneIndex, IndexError> {
    let mut coords: AHashMap<String, Vec<PackedEvent>> = AHashMap::default();
    let mut ids: AHashMap<String, Vec<String>> = AHashMap::default();

    let mut current_contig: Option<String> = None;
    let mut seen_gene_ids: AHashSet<String> = AHashSet::default();
    let mut has_duplicate = false;

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let first = line.as_bytes()[0];
        if first == b'>' || first == b'#' {
            // `>>` / `##` mark a super-group name; ignored entirely.
            if line.as_bytes().get(1) == Some(&first) {
                continue;
            }
            let contig = line[1..].trim().to_string();
            coords.entry(contig.clone()).or_default();
            ids.entry(contig.clone()).or_default();
            current_contig = Some(contig);
            continue;
        }

        let Some(contig) = current_contig.clone() else {
            return Err(IndexError::OrphanGeneRecord);
        };

        let mut fields = line.splitn(3, '\t');
        let gene_id = fields.next().unwrap_or("");
        let raw_begin = fields.next();
        let raw_end = fields.next();

        let (begin, end) = match (raw_begin, raw_end) {
            (Some(b), Some(e)) => match (b.trim().parse::<i64>(), e.trim().parse::<i64>()) {
                (Ok(b), Ok(e)) => (b.min(e), b.max(e)),
                _ => return Err(IndexError::InvalidCoordinateLine(line.clone())),
            },
            _ => return Err(IndexError::InvalidCoordinateLine(line.clone())),
        };

        let gene_ids = ids.get_mut(&contig).expect("contig registered at header");
        if gene_ids.len() as u64 > MAX_IDX as u64 {
            return Err(IndexError::GeneIdIndexOverflow(MAX_IDX, contig));
        }
        let idx = gene_ids.len() as u32;
        gene_ids.push(gene_id.to_string());

        if !has_duplicate {
            if seen_gene_ids.contains(gene_id) {
                has_duplicate = true;
            } else {
                seen_gene_ids.insert(gene_id.to_string());
            }
        }

        let events = coords.get_mut(&contig).expect("contig registered at header");
        events.push(PackedEvent::gene_start(begin, idx));
        events.push(PackedEvent::gene_end(end, idx));
    }

    if !presorted {
        // Millions of gene intervals across many contigs is the expected
        // scale; sorting each contig's event vector is independent, so fan
        // it out across a rayon pool instead of sorting one contig at a
        // time.
        coords
            .values_mut()
            .collect::<Vec<_>>()
            .par_iter_mut()
            .for_each(|events| events.sort_unstable());
    }

    Ok(GeneIndex {
        coords,
        ids,
        has_duplicate_gene_ids: has_duplicate,
    })
}
