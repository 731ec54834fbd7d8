//! Gene length calculation (ancillary — not on the sweep hot
//! path). Used by downstream normalization.

use ahash::AHashMap;

use crate::index::GeneIndex;

/// Compute the length of every gene in the index by scanning its packed
/// events directly: a gene start subtracts its position, a gene end adds
/// its position, leaving `end - start`.
pub fn calc_gene_lengths(index: &GeneIndex, prefix: bool) -> AHashMap<String, i64> {
    let mut lengths: AHashMap<String, i64> = AHashMap::default();

    for (contig, events) in &index.coords {
        let ids = &index.ids[contig];
        for ev in events {
            let gene_id = &ids[ev.idx() as usize];
            let key = if prefix {
                format!("{}_{}", contig, gene_id)
            } else {
                gene_id.clone()
            };
            let entry = lengths.entry(key).or_insert(0);
            if ev.is_start() {
                *entry -= ev.pos();
            } else {
                *entry += ev.pos();
            }
        }
    }

    lengths
}
