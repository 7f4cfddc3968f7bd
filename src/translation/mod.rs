mod client;
mod error;
mod language;
mod prompt;

pub use client::{
    ApiKey, ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT,
    GeminiClient, TranslationRequest, Translator,
};
pub use error::TranslateError;
pub use language::{
    Language, LanguageError, SUPPORTED_LANGUAGES, parse_source_language, parse_target_language,
    print_languages, validate_target,
};
pub use prompt::{RETURN_ONLY_INSTRUCTION, build_prompt};
