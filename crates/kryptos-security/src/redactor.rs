//! Redaction engine
//!
//! Turns a text and its candidate findings into the redacted text. Two
//! strategies exist:
//!
//! - `OverlapPolicy::Splice` replaces findings right to left directly in the
//!   working string, with offsets taken from the original text. Findings that
//!   overlap each other corrupt the splice (see `splice`).
//! - `OverlapPolicy::Longest` and `OverlapPolicy::Priority` group overlapping
//!   findings, cover each group with a single marker, then build the output
//!   in one linear pass.

use std::cmp::Ordering;

use kryptos_core::{Category, Finding, Label, OverlapPolicy};

/// Ordered findings ready to be applied to the text they were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionPlan {
    policy: OverlapPolicy,
    findings: Vec<Finding>,
    /// Input index behind each planned finding
    sources: Vec<usize>,
}

impl RedactionPlan {
    /// Findings in application order: descending `start` for `Splice`,
    /// ascending `start` for the merge policies.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn apply(&self, text: &str) -> String {
        match self.policy {
            OverlapPolicy::Splice => splice(text, &self.findings),
            OverlapPolicy::Longest | OverlapPolicy::Priority => merge(text, &self.findings),
        }
    }
}

/// Redacted text plus the findings that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    pub text: String,
    pub applied: Vec<Finding>,
    /// Input index behind each entry of `applied`
    pub sources: Vec<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redactor {
    policy: OverlapPolicy,
}

impl Redactor {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Order (and for the merge policies, group) findings for `text`.
    ///
    /// Findings whose range is empty, out of bounds or not on char
    /// boundaries of `text` are dropped.
    pub fn plan(&self, text: &str, findings: &[Finding]) -> RedactionPlan {
        let valid: Vec<(usize, &Finding)> = findings
            .iter()
            .enumerate()
            .filter(|(_, f)| f.start < f.end && text.get(f.start..f.end).is_some())
            .collect();

        let planned: Vec<(usize, Finding)> = match self.policy {
            OverlapPolicy::Splice => {
                // stable: equal starts keep detection order
                let mut ordered = valid;
                ordered.sort_by(|(_, a), (_, b)| b.start.cmp(&a.start));
                ordered.into_iter().map(|(i, f)| (i, f.clone())).collect()
            }
            OverlapPolicy::Longest | OverlapPolicy::Priority => resolve(text, valid, self.policy),
        };

        let (sources, findings): (Vec<usize>, Vec<Finding>) = planned.into_iter().unzip();
        RedactionPlan {
            policy: self.policy,
            findings,
            sources,
        }
    }

    pub fn redact(&self, text: &str, findings: &[Finding]) -> Redaction {
        let plan = self.plan(text, findings);
        let redacted = plan.apply(text);

        Redaction {
            text: redacted,
            applied: plan.findings,
            sources: plan.sources,
        }
    }
}

/// Rank used by `OverlapPolicy::Priority`; lower wins.
fn label_rank(label: &Label) -> u8 {
    match label {
        Label::Role(_) => 0,
        Label::Entity(_) => 1,
        Label::Pattern(Category::FullName) => 3,
        Label::Pattern(_) => 2,
    }
}

/// `Less` when `a` should label a group over `b`.
fn precedence(policy: OverlapPolicy, (ia, a): (usize, &Finding), (ib, b): (usize, &Finding)) -> Ordering {
    let by_label = match policy {
        OverlapPolicy::Priority => label_rank(&a.label).cmp(&label_rank(&b.label)),
        _ => Ordering::Equal,
    };
    by_label
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| ia.cmp(&ib))
}

/// Split findings into groups of transitively overlapping spans. Each group
/// becomes one finding over the union of its spans, labelled by the member
/// that ranks first. Output is in ascending `start` order.
fn resolve(text: &str, mut findings: Vec<(usize, &Finding)>, policy: OverlapPolicy) -> Vec<(usize, Finding)> {
    findings.sort_by_key(|(i, f)| (f.start, *i));

    let mut resolved = Vec::new();
    let mut members = findings.into_iter().peekable();

    while let Some(first) = members.next() {
        let start = first.1.start;
        let mut end = first.1.end;
        let mut winner = first;

        while let Some(&next) = members.peek() {
            if next.1.start >= end {
                break;
            }
            end = end.max(next.1.end);
            if precedence(policy, next, winner) == Ordering::Less {
                winner = next;
            }
            members.next();
        }

        let (index, finding) = winner;
        resolved.push((
            index,
            Finding::new(&text[start..end], finding.label.clone(), start, end),
        ));
    }

    resolved
}

/// Build the output in one pass from disjoint findings sorted by `start`.
fn merge(text: &str, findings: &[Finding]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for finding in findings {
        if finding.start < cursor {
            continue;
        }
        out.push_str(&text[cursor..finding.start]);
        out.push_str(&finding.marker());
        cursor = finding.end;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Replace findings one after another in the working string, in the order
/// given, using offsets computed against the original `text`.
///
/// With findings sorted by descending `start`, disjoint findings are
/// replaced exactly. Overlapping findings are not: once an inner finding is
/// replaced by a marker of a different length, an outer finding that starts
/// further left still cuts at its original end offset, which now points into
/// the shifted region. For A = 5..20 and B = 10..15 on
/// `"0123456789ABCDEFGHIJKLMNOP"`, B is replaced first and A then removes
/// part of B's marker, leaving `"01234[A REMOVIDO]O]FGHIJKLMNOP"`.
///
/// Offsets are converted to character positions of the original text and
/// clamped to the working string, so the splice never panics.
pub fn splice(text: &str, findings: &[Finding]) -> String {
    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let to_char = |byte: usize| boundaries.partition_point(|&b| b < byte);

    let mut chars: Vec<char> = text.chars().collect();
    for finding in findings {
        let start = to_char(finding.start).min(chars.len());
        let end = to_char(finding.end).min(chars.len()).max(start);
        let marker = finding.marker();
        chars.splice(start..end, marker.chars());
    }

    chars.into_iter().collect()
}
