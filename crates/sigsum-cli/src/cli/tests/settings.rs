//! Config fallback, format precedence and stdin text.

use crate::cli::{config_or_default, sign_settings, text_or_stdin};
use sigsum_core::config::{OutputFormat, SigsumConfig};

#[test]
fn format_flag_overrides_config() {
    let cfg = SigsumConfig {
        output_format: OutputFormat::Json,
        read_buffer_bytes: 4096,
    };
    let (format, opts) = sign_settings(Some(OutputFormat::Plain), &cfg);
    assert_eq!(format, OutputFormat::Plain);
    assert_eq!(opts.read_buffer_bytes, 4096);

    let (format, _) = sign_settings(None, &cfg);
    assert_eq!(format, OutputFormat::Json);
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let cfg = config_or_default(Err(anyhow::anyhow!("parse config.toml: bad value")));
    assert_eq!(cfg.output_format, OutputFormat::Plain);
    assert_eq!(cfg.read_buffer_bytes, SigsumConfig::default().read_buffer_bytes);
}

#[test]
fn loaded_config_is_kept() {
    let cfg = config_or_default(Ok(SigsumConfig {
        output_format: OutputFormat::Json,
        read_buffer_bytes: 1,
    }));
    assert_eq!(cfg.output_format, OutputFormat::Json);
    assert_eq!(cfg.read_buffer_bytes, 1);
}

#[test]
fn text_argument_wins_over_stdin() {
    let text = text_or_stdin(Some("abc".to_string()), &b"ignored"[..]).unwrap();
    assert_eq!(text, "abc");
}

#[test]
fn missing_text_reads_stdin_verbatim() {
    let text = text_or_stdin(None, &b"line one\nline two\n"[..]).unwrap();
    assert_eq!(text, "line one\nline two\n");
}

#[test]
fn invalid_utf8_on_stdin_is_an_error() {
    assert!(text_or_stdin(None, &[0xffu8, 0xfe][..]).is_err());
}
