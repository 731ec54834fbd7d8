//! CLI entry point for ordmap.
//!
//! Wires a gene coordinates file and an alignment TSV through the
//! ordinal sweep and writes the per-chunk read-to-gene map to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use ordmap::config::Config;
use ordmap::index::load_gene_index;
use ordmap::mapper::ChunkMapper;
use ordmap::output::write_chunk;
use ordmap::parser::{create_buffered_reader, parse_alignments};

/// Ordinal read-to-gene mapping core for metagenomic classification.
#[derive(Parser, Debug)]
#[command(name = "ordmap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gene coordinates file (required). `>`/`#` lines open a contig block,
    /// `gene_id<TAB>begin<TAB>end` lines name genes within it.
    #[arg(short = 'c', long = "coords")]
    coords: PathBuf,

    /// Alignment TSV file (required):
    /// `query<TAB>subject<TAB>pctid<TAB>length<TAB>begin<TAB>end`.
    #[arg(short = 'a', long = "alignments")]
    alignments: PathBuf,

    /// Output file (required).
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Target alignments per chunk; the boundary only lands on a query
    /// change, so actual chunks are `>= chunk-size`.
    #[arg(long = "chunk-size", default_value = "1000000")]
    chunk_size: usize,

    /// Fraction of the alignment length that must overlap a gene to count.
    #[arg(short = 't', long = "threshold", default_value = "0.8")]
    threshold: f64,

    /// Prefix emitted gene ids with `contig_id + "_"`.
    #[arg(long = "prefix-genes")]
    prefix_genes: bool,

    /// Read-event count at or below which the naive scan is used per contig.
    #[arg(long = "naive-cutoff", default_value = "16")]
    naive_cutoff: usize,

    /// Gene coordinates file is already sorted per contig; skip re-sorting.
    #[arg(long = "presorted")]
    presorted: bool,

    /// Abort on effective-length overflow instead of clamping with a warning.
    #[arg(long = "strict")]
    strict: bool,

    /// Assume genes on every contig are mutually disjoint (enables the
    /// scalar `current_gene` fast path in the merged sweep).
    #[arg(long = "disjoint-genes")]
    disjoint_genes: bool,

    /// Worker threads for index construction (0 = auto-detect).
    #[arg(short = 'j', long = "threads", default_value = "0")]
    threads: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.coords.exists() {
        bail!("gene coordinates file not found: {}", args.coords.display());
    }
    if !args.alignments.exists() {
        bail!("alignment file not found: {}", args.alignments.display());
    }
    if !(args.threshold > 0.0 && args.threshold <= 1.0) {
        bail!("overlap threshold must be in (0, 1], got {}", args.threshold);
    }

    let num_threads = if args.threads == 0 {
        num_cpus::get()
    } else {
        args.threads
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("failed to build thread pool")?;

    eprintln!("Loading gene coordinates: {}", args.coords.display());
    let load_start = Instant::now();
    let index = pool.install(|| load_gene_index(&args.coords, args.presorted))?;
    eprintln!(
        "Loaded {} genes across {} contigs in {:.2}s{}",
        index.gene_count(),
        index.contig_count(),
        load_start.elapsed().as_secs_f64(),
        if index.has_duplicate_gene_ids {
            " (duplicate gene ids present)"
        } else {
            ""
        }
    );

    let mut config = Config::new();
    config.chunk_size = args.chunk_size;
    config.overlap_threshold = args.threshold;
    config.prefix_genes = args.prefix_genes;
    config.naive_cutoff = args.naive_cutoff;
    config.presorted_coords = args.presorted;
    config.strict_length_overflow = args.strict;
    config.assume_disjoint_genes = args.disjoint_genes;

    eprintln!("Processing alignments: {}", args.alignments.display());
    let file = File::open(&args.alignments).context("failed to open alignment file")?;
    let reader = create_buffered_reader(file, &args.alignments);

    eprintln!("Writing output to: {}", args.output.display());
    let out_file = File::create(&args.output).context("failed to create output file")?;
    let mut writer = BufWriter::new(out_file);

    let mut mapper = ChunkMapper::new(&index, config);
    let mut chunks_written = 0u64;
    let mut reads_written = 0u64;

    mapper.run(parse_alignments(reader), |chunk| {
        chunks_written += 1;
        reads_written += chunk.queries.len() as u64;
        if let Err(e) = write_chunk(&mut writer, &chunk) {
            log::error!("failed to write chunk: {}", e);
        }
    })?;

    writer.flush()?;
    eprintln!(
        "Done! {} chunk(s), {} read(s) with at least one gene match.",
        chunks_written, reads_written
    );

    Ok(())
}
