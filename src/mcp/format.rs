//! Text rendering helpers shared across MCP handlers.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;

/// Fallback text for records that carry neither `memory` nor `content`.
const NO_CONTENT: &str = "No content";

/// Extract the display text for one memory record.
///
/// Tiers, in order: `memory` key, `content` key, the literal `"No content"`.
/// Non-string values under those keys are serialized rather than skipped.
pub(crate) fn memory_text(record: &Value) -> String {
    for key in ["memory", "content"] {
        match record.get(key) {
            Some(Value::String(text)) => return text.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }
    NO_CONTENT.to_string()
}

/// Render a 1-indexed listing: a header line followed by `"{index}. {text}\n"` per record.
pub(crate) fn numbered_listing(header: &str, records: &[Value]) -> String {
    let mut out = String::from(header);
    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, memory_text(record)));
    }
    out
}

/// Serialize a JSON value with `", "` and `": "` separators.
///
/// The rendered `add_memory` text is consumed by existing hosts that match on
/// it verbatim, so the separators must stay as they are rather than collapse
/// to serde_json's compact form.
pub(crate) fn dumps(value: &Value) -> String {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
