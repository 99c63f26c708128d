//! Streaming JSONL normalization

use crate::config::ValidationMode;
use crate::normalizer::{Normalized, Normalizer};
use crate::report::NormalizeReport;
use crate::NormalizeError;
use primer_domain::TrainingExample;
use std::io::{BufRead, Write};
use tracing::{info, warn};

impl Normalizer {
    /// Normalize JSONL from `reader` into `writer`, one line at a time
    ///
    /// Blank lines are ignored. In strict mode the first invalid record
    /// aborts the run; in lenient mode it is skipped and counted.
    pub fn normalize_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<NormalizeReport, NormalizeError> {
        let mut report = NormalizeReport::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let raw = line?;
            if raw.trim().is_empty() {
                continue;
            }
            report.processed += 1;

            match self.normalize_detailed(&raw, line_no) {
                Ok(normalized) => write_record(&mut writer, normalized, &mut report)?,
                Err(err @ NormalizeError::Validation { .. }) => match self.config().mode {
                    ValidationMode::Strict => return Err(err),
                    ValidationMode::Lenient => {
                        warn!("Skipping record: {}", err);
                        let reason = match err {
                            NormalizeError::Validation { reason, .. } => reason.to_string(),
                            other => other.to_string(),
                        };
                        report.record_skip(line_no, reason);
                    }
                },
                Err(err) => return Err(err),
            }
        }

        writer.flush()?;
        info!(
            "Normalized {} of {} records ({} skipped)",
            report.written, report.processed, report.skipped
        );
        Ok(report)
    }

    /// Normalize in-memory examples into `writer`
    pub fn write_examples<'a, I, W>(
        &self,
        examples: I,
        mut writer: W,
    ) -> Result<NormalizeReport, NormalizeError>
    where
        I: IntoIterator<Item = &'a TrainingExample>,
        W: Write,
    {
        let mut report = NormalizeReport::new();
        for example in examples {
            report.processed += 1;
            let normalized = self.normalize_example(example)?;
            write_record(&mut writer, normalized, &mut report)?;
        }
        writer.flush()?;
        info!("Wrote {} normalized records", report.written);
        Ok(report)
    }
}

fn write_record<W: Write>(
    writer: &mut W,
    normalized: Normalized,
    report: &mut NormalizeReport,
) -> Result<(), NormalizeError> {
    let line = normalized.record.to_json_line()?;
    writeln!(writer, "{}", line)?;

    report.written += 1;
    if normalized.fields_stripped > 0 {
        report.metadata_stripped += 1;
    }
    if normalized.system_prompt_changed {
        report.system_prompts_changed += 1;
    }
    for topic in normalized.cited_topics {
        report.record_citation(topic);
    }
    Ok(())
}
