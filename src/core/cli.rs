//! CLI-only commands: list variants, convert text, print escapes.
//!
//! These run without opening the TUI and produce plain text output.

use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::catalog::{self, CATALOG, CatalogError, SpaceVariant};
use crate::core::spacing;

/// Error from a headless command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0} (known variants: {known})", known = catalog::labels().collect::<Vec<_>>().join(", "))]
    Catalog(#[from] CatalogError),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of `variants --json`.
#[derive(Serialize)]
struct VariantRow<'a> {
    #[serde(flatten)]
    variant: &'a SpaceVariant,
    escape: String,
}

/// Run the `variants` command: one line per catalog entry, or a JSON array.
pub fn run_variants(out: &mut impl Write, json: bool) -> Result<(), CliError> {
    if json {
        let rows: Vec<VariantRow> = CATALOG
            .iter()
            .map(|v| VariantRow {
                variant: v,
                escape: spacing::code_point_escape(v.sequence),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    let label_w = CATALOG.iter().map(|v| v.label.len()).max().unwrap_or(0);
    let esc_w = CATALOG
        .iter()
        .map(|v| spacing::code_point_escape(v.sequence).len())
        .max()
        .unwrap_or(0);
    for v in CATALOG {
        writeln!(
            out,
            "{:<label_w$}  {:<esc_w$}  {}",
            v.label,
            spacing::code_point_escape(v.sequence),
            v.description
        )?;
    }
    Ok(())
}

/// Resolve labels (case-insensitive) and concatenate their sequences in order.
pub fn combined_sequence(labels: &[String]) -> Result<String, CatalogError> {
    labels
        .iter()
        .map(|l| catalog::find_ignore_case(l).map(|v| v.sequence))
        .collect()
}

/// Input for `convert`: a file, stdin (`-` or nothing), or the literal argument.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String, CliError> {
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    match text {
        Some(t) if t != "-" => Ok(t.to_string()),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Run the `convert` command: write `input` with spaces replaced by the combined variants.
pub fn run_convert(out: &mut impl Write, input: &str, labels: &[String]) -> Result<(), CliError> {
    let sequence = combined_sequence(labels)?;
    log::info!(
        "converting {} space(s) with {}",
        spacing::count_spaces(input),
        spacing::code_point_escape(&sequence)
    );
    out.write_all(spacing::substitute(input, &sequence).as_bytes())?;
    if !input.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

/// Run the `escape` command.
pub fn run_escape(out: &mut impl Write, text: &str) -> Result<(), CliError> {
    writeln!(out, "{}", spacing::code_point_escape(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), CliError>,
    {
        let mut buf = Vec::new();
        f(&mut buf).expect("command succeeds");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn variants_lists_every_label() {
        let out = output(|b| run_variants(b, false));
        assert_eq!(out.lines().count(), CATALOG.len());
        assert!(out.contains("Em Space"));
        assert!(out.contains("\\u2003"));
    }

    #[test]
    fn variants_json_parses() {
        let out = output(|b| run_variants(b, true));
        let rows: Vec<serde_json::Value> = serde_json::from_str(&out).expect("json");
        assert_eq!(rows.len(), CATALOG.len());
        assert_eq!(rows[0]["label"], "Em Space");
        assert_eq!(rows[0]["sequence"], "\u{2003}");
        assert_eq!(rows[0]["escape"], "\\u2003");
    }

    #[test]
    fn combined_sequence_concatenates_in_order() {
        let labels = vec!["thin space".to_string(), "Hair Space".to_string()];
        assert_eq!(
            combined_sequence(&labels).expect("known"),
            "\u{2009}\u{200A}"
        );
    }

    #[test]
    fn combined_sequence_unknown_label() {
        let labels = vec!["Em Space".to_string(), "Tab".to_string()];
        assert!(matches!(
            combined_sequence(&labels),
            Err(CatalogError::UnknownVariant(l)) if l == "Tab"
        ));
    }

    #[test]
    fn unknown_label_error_lists_known_variants() {
        let err = CliError::from(CatalogError::UnknownVariant("Tab".to_string()));
        let msg = err.to_string();
        assert!(msg.starts_with("Unknown variant: Tab"));
        assert!(msg.contains("Em Space, En Space"));
        assert!(msg.contains("Word Joiner"));
    }

    #[test]
    fn convert_appends_newline_once() {
        let labels = vec!["Em Space".to_string()];
        assert_eq!(
            output(|b| run_convert(b, "hello world", &labels)),
            "hello\u{2003}world\n"
        );
        assert_eq!(
            output(|b| run_convert(b, "hello world\n", &labels)),
            "hello\u{2003}world\n"
        );
    }

    #[test]
    fn escape_prints_code_units() {
        assert_eq!(output(|b| run_escape(b, "a b")), "\\u0061\\u0020\\u0062\n");
    }

    #[test]
    fn read_input_prefers_literal_text() {
        assert_eq!(read_input(Some("a b"), None).expect("text"), "a b");
    }

    #[test]
    fn read_input_from_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "from file").expect("write");
        assert_eq!(
            read_input(Some("ignored"), Some(&path)).expect("file"),
            "from file"
        );
    }
}
