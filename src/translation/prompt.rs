use super::Language;

/// The instruction that keeps the model from adding commentary.
pub const RETURN_ONLY_INSTRUCTION: &str = "Return ONLY the translated text without explanation";

/// Builds the single instruction prompt sent to the model.
///
/// Labels and text are inserted verbatim; the text is appended last so that
/// nothing in it can be mistaken for a placeholder.
pub fn build_prompt(source: Language, target: Language, text: &str) -> String {
    format!(
        "Translate the following text from {} to {}. {RETURN_ONLY_INSTRUCTION}: {text}",
        source.label(),
        target.label()
    )
}
