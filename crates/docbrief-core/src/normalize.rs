//! Model response normalization.
//!
//! Model output is untrusted text: ideally a single JSON object matching
//! [`SummaryRecord`], in practice often labeled free text or plain noise.
//! Normalization is total. A strict JSON attempt runs first, then a
//! line-oriented fallback scanner, and whatever neither stage recovers is
//! filled with empty defaults. The shape of the result is guaranteed; the
//! content is best-effort.

use serde_json::Value;

use crate::models::summary::SummaryRecord;

/// Normalize raw model output into a [`SummaryRecord`].
///
/// Never fails: any input, including empty or garbage text, produces a
/// fully-populated record.
pub fn normalize(raw: &str) -> SummaryRecord {
    match try_parse_json(raw) {
        Some(record) => record,
        None => parse_labeled_lines(raw),
    }
}

/// Strict first stage: accept the output only if it parses as a JSON
/// object.
///
/// Fields are taken from the object where present and correctly typed;
/// anything absent or mistyped keeps that field's empty default. Non-object
/// JSON (a bare string or array is still valid JSON) is rejected so the
/// line scanner gets a chance at it.
fn try_parse_json(raw: &str) -> Option<SummaryRecord> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let map = value.as_object()?;

    let mut record = SummaryRecord::default();
    if let Some(summary) = map.get("summary").and_then(Value::as_str) {
        record.summary = summary.to_string();
    }
    if let Some(sentiment) = map.get("sentiment").and_then(Value::as_str) {
        record.sentiment = sentiment.to_string();
    }
    record.insights = string_items(map.get("insights"));
    record.actions = string_items(map.get("actions"));
    record.risks = string_items(map.get("risks"));
    Some(record)
}

/// String elements of a JSON array value. Non-arrays and non-string
/// elements contribute nothing.
fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Field the line scanner is currently attributing lines to.
#[derive(Clone, Copy)]
enum Cursor {
    Summary,
    Sentiment,
    Insights,
    Actions,
    Risks,
}

/// Fallback second stage: reconstruct the record from loosely labeled
/// lines.
///
/// Recognizes `summary:` / `sentiment:` / `insights:` / `actions:` /
/// `risks:` headers case-insensitively and attributes following lines to
/// the most recent header. Lines before any header are discarded. A
/// repeated header reassigns its field. A `sentiment:` header appearing
/// mid-list moves the cursor and strands the in-progress list; that
/// mirrors the upstream parser and is deliberate.
fn parse_labeled_lines(raw: &str) -> SummaryRecord {
    let mut record = SummaryRecord::default();
    let mut cursor: Option<Cursor> = None;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = strip_header(line, "summary:") {
            cursor = Some(Cursor::Summary);
            record.summary = rest.to_string();
        } else if let Some(rest) = strip_header(line, "sentiment:") {
            cursor = Some(Cursor::Sentiment);
            record.sentiment = rest.to_string();
        } else if strip_header(line, "insights:").is_some() {
            cursor = Some(Cursor::Insights);
        } else if strip_header(line, "actions:").is_some() {
            cursor = Some(Cursor::Actions);
        } else if strip_header(line, "risks:").is_some() {
            cursor = Some(Cursor::Risks);
        } else {
            match cursor {
                Some(Cursor::Insights) => push_item(&mut record.insights, line),
                Some(Cursor::Actions) => push_item(&mut record.actions, line),
                Some(Cursor::Risks) => push_item(&mut record.risks, line),
                Some(Cursor::Summary) => {
                    if record.summary.is_empty() {
                        record.summary = line.to_string();
                    } else {
                        record.summary.push(' ');
                        record.summary.push_str(line);
                    }
                }
                // Sentiment is single-valued; continuation lines are dropped.
                Some(Cursor::Sentiment) | None => {}
            }
        }
    }

    record
}

/// The remainder of `line` after `header`, trimmed, if `line` starts with
/// `header` case-insensitively.
fn strip_header<'a>(line: &'a str, header: &str) -> Option<&'a str> {
    let prefix = line.get(..header.len())?;
    let rest = line.get(header.len()..)?;
    prefix.eq_ignore_ascii_case(header).then(|| rest.trim())
}

/// Append a list item, stripping one leading `-` marker. Items that end up
/// empty are dropped.
fn push_item(items: &mut Vec<String>, line: &str) {
    let item = line.strip_prefix('-').unwrap_or(line).trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
}
