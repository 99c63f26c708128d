//! JSONL file helpers.

use crate::error::Result;
use primer_domain::TaggedExample;
use primer_normalizer::parse_record;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Open a file for buffered reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Create (or truncate) a file for buffered writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// Write `path` through a sibling temporary file.
///
/// The file only appears at `path` when `write` succeeds; on error the
/// temporary file is removed and any existing file at `path` is untouched.
pub fn write_atomic<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<T>,
{
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let temp = NamedTempFile::new_in(dir)?;
    let value = {
        let mut writer = BufWriter::new(temp.as_file());
        let value = write(&mut writer)?;
        writer.flush()?;
        value
    };
    temp.persist(path).map_err(|e| e.error)?;
    Ok(value)
}

/// Read tagged examples from a JSONL file.
///
/// The tag comes from `metadata.category`, falling back to `fallback`.
/// Any invalid line aborts the read with its line number.
pub fn read_tagged(path: &Path, fallback: &str) -> Result<Vec<TaggedExample>> {
    let reader = open_input(path)?;
    let mut examples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let raw = line?;
        if raw.trim().is_empty() {
            continue;
        }
        let parsed = parse_record(&raw, idx + 1)?;
        let category = parsed
            .extra
            .get("metadata")
            .and_then(|m| m.get("category"))
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string();
        examples.push(TaggedExample::new(parsed.example, category));
    }
    Ok(examples)
}

/// Intermediate record: the conversation plus its category and source.
pub fn tagged_record(tagged: &TaggedExample, source: Option<&str>) -> Value {
    let mut metadata = Map::new();
    metadata.insert("category".to_string(), json!(tagged.category));
    if let Some(source) = source {
        metadata.insert("source".to_string(), json!(source));
    }
    json!({
        "messages": tagged.example.messages,
        "metadata": metadata,
    })
}

/// Write tagged examples as intermediate JSONL; returns the count written.
pub fn write_tagged<W: Write>(
    mut writer: W,
    examples: &[TaggedExample],
    source: Option<&str>,
) -> Result<usize> {
    for tagged in examples {
        let line = serde_json::to_string(&tagged_record(tagged, source))?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(examples.len())
}

/// Write arbitrary JSON values as JSONL; returns the count written.
pub fn write_values<W: Write>(mut writer: W, values: &[Value]) -> Result<usize> {
    for value in values {
        writeln!(writer, "{}", serde_json::to_string(value)?)?;
    }
    writer.flush()?;
    Ok(values.len())
}
