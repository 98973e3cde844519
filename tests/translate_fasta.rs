use bio::io::fasta;
use std::fs;
use std::path::Path;
use t3ss_scan::translation::{
    translate_fasta, SkipReason, TranslateOptions, TRANSLATED_DESCRIPTION,
};

fn read_records(path: &Path) -> Vec<fasta::Record> {
    fasta::Reader::from_file(path)
        .unwrap()
        .records()
        .map(|r| r.unwrap())
        .collect()
}

#[test]
fn complete_codons_translate_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genes.fna");
    let output = dir.path().join("genes.faa");
    fs::write(
        &input,
        ">sctV_1 first gene\nATGAAACCCTAA\n>sctN_2 second gene\nATGTTTGGG\n",
    )
    .unwrap();

    let report = translate_fasta(&input, &output, TranslateOptions::standalone()).unwrap();

    assert_eq!(report.written, 2);
    assert!(report.skipped.is_empty());
    let records = read_records(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id(), "sctV_1_translated");
    assert_eq!(records[0].desc(), Some(TRANSLATED_DESCRIPTION));
    assert_eq!(records[0].seq(), b"MKP*");
    assert_eq!(records[1].seq(), b"MFG");
}

#[test]
fn incomplete_codons_are_skipped_one_warning_each() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genes.fna");
    let output = dir.path().join("genes.faa");
    fs::write(
        &input,
        ">ok\nATGAAA\n>short1\nATGAA\n>short2\nATGAAAC\n>bad\nATGZZZ\n",
    )
    .unwrap();

    let report = translate_fasta(&input, &output, TranslateOptions::standalone()).unwrap();

    assert_eq!(report.written, 1);
    let skipped: Vec<_> = report.skipped.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(skipped, ["short1", "short2", "bad"]);
    assert_eq!(report.skipped[0].reason, SkipReason::IncompleteCodon { len: 5 });
    assert!(matches!(
        report.skipped[2].reason,
        SkipReason::Untranslatable(_)
    ));
    assert_eq!(read_records(&output).len(), 1);
}

#[test]
fn pipeline_mode_keeps_headers_and_partial_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genes.fna");
    let output = dir.path().join("genes.faa");
    fs::write(&input, ">contig_7 plasmid pT3\nATGAAACC\n").unwrap();

    let report = translate_fasta(&input, &output, TranslateOptions::pipeline()).unwrap();

    assert_eq!(report.written, 1);
    let records = read_records(&output);
    assert_eq!(records[0].id(), "contig_7");
    assert_eq!(records[0].desc(), Some("plasmid pT3"));
    assert_eq!(records[0].seq(), b"MK");
}

#[test]
fn missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("genes.faa");

    let err = translate_fasta(
        &dir.path().join("absent.fna"),
        &output,
        TranslateOptions::standalone(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("absent.fna"));
    assert!(!output.exists());
}

#[test]
fn gzip_input_matches_plain_input() {
    let dir = tempfile::tempdir().unwrap();
    let fasta_text = b">sctV_1 first gene\nATGAAACCCTAA\n>sctN_2\nATGTTTGGGNNN\n>short\nATGA\n";
    let plain = dir.path().join("genes.fna");
    let gzipped = dir.path().join("genes.fna.gz");
    fs::write(&plain, fasta_text).unwrap();
    {
        let mut writer = niffler::to_path(
            &gzipped,
            niffler::compression::Format::Gzip,
            niffler::Level::Six,
        )
        .unwrap();
        std::io::Write::write_all(&mut writer, fasta_text).unwrap();
    }

    let plain_out = dir.path().join("plain.faa");
    let gz_out = dir.path().join("gz.faa");
    let plain_report = translate_fasta(&plain, &plain_out, TranslateOptions::standalone()).unwrap();
    let gz_report = translate_fasta(&gzipped, &gz_out, TranslateOptions::standalone()).unwrap();

    assert_eq!(plain_report.written, 2);
    assert_eq!(gz_report.written, plain_report.written);
    assert_eq!(gz_report.skipped, plain_report.skipped);
    let summarize = |path: &Path| -> Vec<(String, Vec<u8>)> {
        read_records(path)
            .into_iter()
            .map(|r| (r.id().to_string(), r.seq().to_vec()))
            .collect()
    };
    assert_eq!(summarize(&gz_out), summarize(&plain_out));
    assert_eq!(read_records(&gz_out)[1].seq(), b"MFGX");
}
