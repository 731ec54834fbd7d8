//! Naive nested scan: used per-contig when the read-event count
//! is small enough that merging into the gene list isn't worth the sort.

use ahash::AHashMap;

use crate::event::PackedEvent;

fn pair_up_reads(read_events: &[PackedEvent]) -> Vec<(u32, i64, i64, u32)> {
    let mut starts: AHashMap<u32, (i64, u32)> = AHashMap::default();
    let mut reads = Vec::new();
    for ev in read_events {
        if ev.is_start() {
            starts.insert(ev.idx(), (ev.pos(), ev.len_or_flag()));
        } else if let Some((r_begin, l)) = starts.remove(&ev.idx()) {
            reads.push((ev.idx(), r_begin, ev.pos(), l));
        }
    }
    reads
}

/// Linear scan of (already-sorted) gene events against a pre-computed read
/// list, yielding every `(read_idx, gene_idx)` pair meeting the threshold.
pub fn naive_scan(gene_events: &[PackedEvent], read_events: &[PackedEvent]) -> Vec<(u32, u32)> {
    let reads = pair_up_reads(read_events);
    let mut open_genes: AHashMap<u32, i64> = AHashMap::default();
    let mut pairs = Vec::new();

    for ev in gene_events {
        if ev.is_start() {
            open_genes.insert(ev.idx(), ev.pos());
        } else {
            let gene_start = open_genes
                .remove(&ev.idx())
                .expect("gene end without matching start");
            let gene_end = ev.pos();
            for &(read_idx, r_begin, r_end, l) in &reads {
                let overlap = gene_end.min(r_end) - gene_start.max(r_begin);
                if overlap >= l as i64 {
                    pairs.push((read_idx, ev.idx()));
                }
            }
        }
    }
    pairs
}
