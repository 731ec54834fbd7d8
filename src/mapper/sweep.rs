//! Merged sweep: the hot path.
//!
//! Gene events arrive pre-sorted (from [`crate::index::GeneIndex`]); read
//! events arrive in arrival order and are sorted once per flush. The merge
//! exploits the pre-sorted gene prefix instead of re-sorting everything.

use ahash::AHashMap;

use crate::event::PackedEvent;

fn merge_sorted(gene_events: &[PackedEvent], read_events_sorted: &[PackedEvent]) -> Vec<PackedEvent> {
    let mut merged = Vec::with_capacity(gene_events.len() + read_events_sorted.len());
    let mut gi = 0;
    let mut ri = 0;
    while gi < gene_events.len() && ri < read_events_sorted.len() {
        if gene_events[gi] <= read_events_sorted[ri] {
            merged.push(gene_events[gi]);
            gi += 1;
        } else {
            merged.push(read_events_sorted[ri]);
            ri += 1;
        }
    }
    merged.extend_from_slice(&gene_events[gi..]);
    merged.extend_from_slice(&read_events_sorted[ri..]);
    merged
}

/// Merge `gene_events` (sorted) with `read_events` (unsorted) and sweep
/// once, yielding every `(read_idx, gene_idx)` pair whose overlap meets
/// the per-read threshold. General case: genes on the contig may overlap.
pub fn sweep(gene_events: &[PackedEvent], read_events: &[PackedEvent]) -> Vec<(u32, u32)> {
    let mut reads_sorted = read_events.to_vec();
    reads_sorted.sort_unstable();
    let queue = merge_sorted(gene_events, &reads_sorted);

    let mut open_genes: AHashMap<u32, i64> = AHashMap::default();
    let mut open_reads: AHashMap<u32, (i64, u32)> = AHashMap::default();
    let mut pairs = Vec::new();

    for ev in queue {
        let pos = ev.pos();
        if ev.is_gene() {
            if ev.is_start() {
                open_genes.insert(ev.idx(), pos);
            } else {
                let g_start = open_genes
                    .remove(&ev.idx())
                    .expect("gene end without matching start");
                for (&r_idx, &(r_start, l)) in open_reads.iter() {
                    if pos - g_start.max(r_start) >= l as i64 {
                        pairs.push((r_idx, ev.idx()));
                    }
                }
            }
        } else if ev.is_start() {
            open_reads.insert(ev.idx(), (pos, ev.len_or_flag()));
        } else {
            let (r_start, l) = open_reads
                .remove(&ev.idx())
                .expect("read end without matching start");
            for (&g_idx, &g_start) in open_genes.iter() {
                if pos - g_start.max(r_start) >= l as i64 {
                    pairs.push((ev.idx(), g_idx));
                }
            }
        }
    }
    pairs
}

/// Same sweep, specialized for a contig whose genes are known to be
/// mutually disjoint: a scalar `current_gene` replaces the `open_genes`
/// table. Semantically identical to [`sweep`] under that precondition.
pub fn sweep_disjoint(gene_events: &[PackedEvent], read_events: &[PackedEvent]) -> Vec<(u32, u32)> {
    let mut reads_sorted = read_events.to_vec();
    reads_sorted.sort_unstable();
    let queue = merge_sorted(gene_events, &reads_sorted);

    let mut current_gene: Option<(u32, i64)> = None;
    let mut open_reads: AHashMap<u32, (i64, u32)> = AHashMap::default();
    let mut pairs = Vec::new();

    for ev in queue {
        let pos = ev.pos();
        if ev.is_gene() {
            if ev.is_start() {
                current_gene = Some((ev.idx(), pos));
            } else {
                let (gene_idx, g_start) = current_gene
                    .take()
                    .expect("gene end without matching start");
                for (&r_idx, &(r_start, l)) in open_reads.iter() {
                    if pos - g_start.max(r_start) >= l as i64 {
                        pairs.push((r_idx, gene_idx));
                    }
                }
            }
        } else if ev.is_start() {
            open_reads.insert(ev.idx(), (pos, ev.len_or_flag()));
        } else {
            let (r_start, l) = open_reads
                .remove(&ev.idx())
                .expect("read end without matching start");
            if let Some((gene_idx, g_start)) = current_gene {
                if pos - g_start.max(r_start) >= l as i64 {
                    pairs.push((ev.idx(), gene_idx));
                }
            }
        }
    }
    pairs
}
