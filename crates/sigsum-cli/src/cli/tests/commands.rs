//! Handler output, written into an in-memory buffer.

use crate::cli::commands::{run_algorithms, run_completions, run_sign, run_verify};
use sigsum_core::config::OutputFormat;
use sigsum_core::{Algorithm, InputSource, SignOptions, PROMPT_MESSAGE};
use std::io::Write;

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn sign_text_prints_fourteen_lines() {
    let mut buf = Vec::new();
    run_sign(
        &InputSource::text("abc"),
        SignOptions::default(),
        OutputFormat::Plain,
        &mut buf,
    )
    .unwrap();
    let out = output(buf);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "CRC32=891568578");
    assert_eq!(lines[3], "md5=900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        lines[5],
        "sha256=ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sign_empty_text_prints_prompt() {
    let mut buf = Vec::new();
    run_sign(
        &InputSource::text(""),
        SignOptions::default(),
        OutputFormat::Json,
        &mut buf,
    )
    .unwrap();
    assert_eq!(output(buf), format!("{PROMPT_MESSAGE}\n"));
}

#[test]
fn sign_file_as_json() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"abc").unwrap();
    f.flush().unwrap();
    let mut buf = Vec::new();
    run_sign(
        &InputSource::file(f.path()),
        SignOptions::default(),
        OutputFormat::Json,
        &mut buf,
    )
    .unwrap();
    let out = output(buf);
    assert!(out.trim_start().starts_with('{'));
    assert!(out.contains("\"CRC32\": \"891568578\""));
    assert!(out.contains("\"sha1\": \"a9993e364706816aba3e25717850c26c9cd0d89d\""));
}

#[test]
fn sign_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut buf = Vec::new();
    let err = run_sign(
        &InputSource::file(dir.path().join("gone.bin")),
        SignOptions::default(),
        OutputFormat::Plain,
        &mut buf,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("gone.bin"));
    assert!(buf.is_empty());
}

#[test]
fn verify_lists_matching_algorithms() {
    let mut buf = Vec::new();
    run_verify(
        &InputSource::text("abc"),
        "900150983CD24FB0D6963F7D28E17F72",
        None,
        SignOptions::default(),
        &mut buf,
    )
    .unwrap();
    assert_eq!(output(buf), "md5: OK\n");
}

#[test]
fn verify_without_match_fails() {
    let mut buf = Vec::new();
    let err = run_verify(
        &InputSource::text("abc"),
        "deadbeef",
        None,
        SignOptions::default(),
        &mut buf,
    )
    .unwrap_err();
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn verify_empty_input_fails_with_prompt() {
    let mut buf = Vec::new();
    let err = run_verify(&InputSource::text(""), "0", None, SignOptions::default(), &mut buf)
        .unwrap_err();
    assert_eq!(err.to_string(), PROMPT_MESSAGE);
}

#[test]
fn verify_restricted_to_one_algorithm() {
    let mut buf = Vec::new();
    let err = run_verify(
        &InputSource::text("abc"),
        "891568578",
        Some(Algorithm::Crc32c),
        SignOptions::default(),
        &mut buf,
    )
    .unwrap_err();
    assert!(err.to_string().contains("does not match CRC32C"));

    let mut buf = Vec::new();
    run_verify(
        &InputSource::text("abc"),
        "891568578",
        Some(Algorithm::Crc32),
        SignOptions::default(),
        &mut buf,
    )
    .unwrap();
    assert_eq!(output(buf), "CRC32: OK\n");
}

#[test]
fn algorithms_table_lists_battery_in_order() {
    let mut buf = Vec::new();
    run_algorithms(&mut buf).unwrap();
    let out = output(buf);
    let names: Vec<&str> = out
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(names.len(), 14);
    assert_eq!(names[0], "CRC32");
    assert_eq!(names[13], "sha512_256");
    assert!(out.lines().nth(1).unwrap().contains("checksum"));
}

#[test]
fn completions_mention_subcommands() {
    let mut buf = Vec::new();
    run_completions(clap_complete::Shell::Bash, &mut buf).unwrap();
    let out = output(buf);
    assert!(out.contains("sigsum"));
    assert!(out.contains("verify"));
}
