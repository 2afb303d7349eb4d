//! Annotate command: show the inference for a piece of text.

use crate::cli::args::OutputFormat;
use crate::error::TaskhintError;
use crate::features::nlp::Annotator;
use crate::output::format_annotation;

/// Execute the annotate command.
///
/// # Errors
///
/// Returns an error if the joined text exceeds the annotator's input cap.
pub fn annotate(
    annotator: &Annotator,
    words: &[String],
    format: OutputFormat,
) -> Result<String, TaskhintError> {
    let text = words.join(" ");
    let annotation = annotator.try_annotate(&text)?;
    format_annotation(&text, &annotation, format)
}
