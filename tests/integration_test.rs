//! End-to-end CLI test: writes a gene coordinates file and an alignment
//! file to a temp dir, runs the `ordmap` binary, and checks the emitted TSV.

use assert_cmd::Command;
use std::fs;
use std::io::{BufRead, BufReader};
use tempfile::tempdir;

#[test]
fn cli_scenario_a_single_overlap_above_threshold() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let coords_path = dir.path().join("genes.coords");
    let aln_path = dir.path().join("alignments.tsv");
    let out_path = dir.path().join("out.tsv");

    fs::write(&coords_path, ">N1\ng1\t100\t200\n")?;
    fs::write(&aln_path, "r1\tN1\t98.2\t50\t150\t199\n")?;

    Command::cargo_bin("ordmap")?
        .arg("-c")
        .arg(&coords_path)
        .arg("-a")
        .arg(&aln_path)
        .arg("-o")
        .arg(&out_path)
        .arg("-t")
        .arg("0.8")
        .assert()
        .success();

    let contents = fs::read_to_string(&out_path)?;
    assert_eq!(contents, "r1\tg1:1\n");
    Ok(())
}

#[test]
fn cli_scenario_b_overlap_below_threshold_yields_empty_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let coords_path = dir.path().join("genes.coords");
    let aln_path = dir.path().join("alignments.tsv");
    let out_path = dir.path().join("out.tsv");

    fs::write(&coords_path, ">N1\ng1\t100\t200\n")?;
    fs::write(&aln_path, "r1\tN1\t98.2\t50\t190\t239\n")?;

    Command::cargo_bin("ordmap")?
        .arg("-c")
        .arg(&coords_path)
        .arg("-a")
        .arg(&aln_path)
        .arg("-o")
        .arg(&out_path)
        .arg("-t")
        .arg("0.8")
        .assert()
        .success();

    let contents = fs::read_to_string(&out_path)?;
    assert!(contents.is_empty());
    Ok(())
}

#[test]
fn cli_prefix_genes_and_gzip_coords() -> Result<(), Box<dyn std::error::Error>> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = tempdir()?;
    let coords_path = dir.path().join("genes.coords.gz");
    let aln_path = dir.path().join("alignments.tsv");
    let out_path = dir.path().join("out.tsv");

    let file = fs::File::create(&coords_path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(b">N1\ng1\t100\t200\n")?;
    encoder.finish()?;

    fs::write(&aln_path, "r1\tN1\t98.2\t50\t110\t159\n")?;

    Command::cargo_bin("ordmap")?
        .arg("-c")
        .arg(&coords_path)
        .arg("-a")
        .arg(&aln_path)
        .arg("-o")
        .arg(&out_path)
        .arg("-t")
        .arg("0.5")
        .arg("--prefix-genes")
        .assert()
        .success();

    let contents = fs::read_to_string(&out_path)?;
    assert_eq!(contents, "r1\tN1_g1:1\n");
    Ok(())
}

#[test]
fn cli_missing_coords_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let aln_path = dir.path().join("alignments.tsv");
    let out_path = dir.path().join("out.tsv");
    fs::write(&aln_path, "r1\tN1\t98.2\t50\t110\t159\n")?;

    Command::cargo_bin("ordmap")?
        .arg("-c")
        .arg(dir.path().join("missing.coords"))
        .arg("-a")
        .arg(&aln_path)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .failure();

    Ok(())
}

#[test]
fn cli_multi_read_output_sorted_by_query_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let coords_path = dir.path().join("genes.coords");
    let aln_path = dir.path().join("alignments.tsv");
    let out_path = dir.path().join("out.tsv");

    fs::write(
        &coords_path,
        ">N1\ng1\t10\t50\ng2\t40\t90\ng3\t100\t150\n",
    )?;
    fs::write(
        &aln_path,
        "r1\tN1\t99\t20\t20\t39\nr2\tN1\t99\t30\t45\t74\nr3\tN1\t99\t20\t110\t129\n",
    )?;

    Command::cargo_bin("ordmap")?
        .arg("-c")
        .arg(&coords_path)
        .arg("-a")
        .arg(&aln_path)
        .arg("-o")
        .arg(&out_path)
        .arg("-t")
        .arg("0.5")
        .assert()
        .success();

    let reader = BufReader::new(fs::File::open(&out_path)?);
    let mut rows: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    rows.sort();
    assert_eq!(
        rows,
        vec![
            "r1\tg1:1".to_string(),
            "r2\tg1:1\tg2:1".to_string(),
            "r3\tg3:1".to_string(),
        ]
    );
    Ok(())
}
