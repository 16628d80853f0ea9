use anyhow::Result;
use kryptos_core::Finding;
use kryptos_engine::{Anonymized, Anonymizer};
use kryptos_sources::Document;
use serde::Serialize;

use crate::cli::InputArgs;
use crate::commands::read_input;

#[derive(Serialize)]
struct ScanReport<'a> {
    format: String,
    pages: usize,
    fingerprint: &'a str,
    findings: Vec<ScanEntry<'a>>,
}

#[derive(Serialize)]
struct ScanEntry<'a> {
    #[serde(flatten)]
    finding: &'a Finding,
    applied: bool,
}

pub async fn handle(anonymizer: &Anonymizer, input: InputArgs, json: bool) -> Result<()> {
    let document = read_input(input).await?;
    let result = anonymizer.anonymize(&document.text)?;

    let entries = entries(&result);

    if json {
        let report = ScanReport {
            format: document.format.to_string(),
            pages: document.pages,
            fingerprint: &document.fingerprint,
            findings: entries,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_table(&document, &entries);
    Ok(())
}

/// One entry per candidate; a candidate is applied when it labelled a marker
fn entries(result: &Anonymized) -> Vec<ScanEntry<'_>> {
    result
        .candidates
        .iter()
        .enumerate()
        .map(|(index, finding)| ScanEntry {
            finding,
            applied: result.sources.contains(&index),
        })
        .collect()
}

fn print_table(document: &Document, entries: &[ScanEntry]) {
    println!(
        "Document: {} ({} page(s), {} bytes)",
        document.format, document.pages, document.size_bytes
    );

    if entries.is_empty() {
        println!("No findings.");
        return;
    }

    let applied = entries.iter().filter(|e| e.applied).count();
    println!("Findings: {} candidate(s), {} applied", entries.len(), applied);
    for entry in entries {
        let mark = if entry.applied { "✓" } else { "-" };
        println!(
            "  {} {:>6}..{:<6} {:<20} {}",
            mark,
            entry.finding.start,
            entry.finding.end,
            entry.finding.label.to_string(),
            entry.finding.text.replace('\n', " ")
        );
    }
}
