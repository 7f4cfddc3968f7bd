//! The closed set of languages offered for translation.

use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A language the translator can be asked to read or write.
///
/// The display label is what goes into the prompt; the short code only exists
/// so the language can be typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Auto,
    English,
    Hindi,
    Marathi,
    Gujarati,
    Tamil,
    Telugu,
    Bengali,
    Punjabi,
    Kannada,
    Malayalam,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Arabic,
    ChineseSimplified,
    ChineseTraditional,
    Japanese,
    Korean,
    Dutch,
    Turkish,
    Vietnamese,
    Thai,
}

/// Every language with its short code, in display order.
pub const SUPPORTED_LANGUAGES: &[(Language, &str)] = &[
    (Language::Auto, "auto"),
    (Language::English, "en"),
    (Language::Hindi, "hi"),
    (Language::Marathi, "mr"),
    (Language::Gujarati, "gu"),
    (Language::Tamil, "ta"),
    (Language::Telugu, "te"),
    (Language::Bengali, "bn"),
    (Language::Punjabi, "pa"),
    (Language::Kannada, "kn"),
    (Language::Malayalam, "ml"),
    (Language::Spanish, "es"),
    (Language::French, "fr"),
    (Language::German, "de"),
    (Language::Italian, "it"),
    (Language::Portuguese, "pt"),
    (Language::Russian, "ru"),
    (Language::Arabic, "ar"),
    (Language::ChineseSimplified, "zh"),
    (Language::ChineseTraditional, "zh-TW"),
    (Language::Japanese, "ja"),
    (Language::Korean, "ko"),
    (Language::Dutch, "nl"),
    (Language::Turkish, "tr"),
    (Language::Vietnamese, "vi"),
    (Language::Thai, "th"),
];

impl Language {
    /// Default source language for a fresh session.
    pub const DEFAULT_SOURCE: Self = Self::Auto;
    /// Default target language for a fresh session.
    pub const DEFAULT_TARGET: Self = Self::English;

    /// The display label, e.g. `"Chinese (Simplified)"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto-detect",
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
            Self::Gujarati => "Gujarati",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Bengali => "Bengali",
            Self::Punjabi => "Punjabi",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Portuguese => "Portuguese",
            Self::Russian => "Russian",
            Self::Arabic => "Arabic",
            Self::ChineseSimplified => "Chinese (Simplified)",
            Self::ChineseTraditional => "Chinese (Traditional)",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Dutch => "Dutch",
            Self::Turkish => "Turkish",
            Self::Vietnamese => "Vietnamese",
            Self::Thai => "Thai",
        }
    }

    /// The short code accepted on the command line.
    pub fn code(self) -> &'static str {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(lang, _)| *lang == self)
            .map_or("", |(_, code)| code)
    }

    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// All languages, source side.
    pub fn all() -> impl Iterator<Item = Self> {
        SUPPORTED_LANGUAGES.iter().map(|(lang, _)| *lang)
    }

    /// Languages that may be chosen as a translation target.
    pub fn targets() -> impl Iterator<Item = Self> {
        Self::all().filter(|lang| !lang.is_auto())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Language lookup and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error(
        "Unknown language: '{0}'\n\n\
         Use a code (es, ja, zh-TW, ...) or a name (Spanish, Japanese, ...).\n\
         Run 'qtr languages' to see all supported languages."
    )]
    Unknown(String),

    #[error("Auto-detect can only be used as the source language")]
    AutoDetectTarget,
}

impl FromStr for Language {
    type Err = LanguageError;

    /// Accepts a short code (`es`, `zh-TW`) or a label (`spanish`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(lang, code)| {
                code.eq_ignore_ascii_case(needle) || lang.label().eq_ignore_ascii_case(needle)
            })
            .map(|(lang, _)| *lang)
            .ok_or_else(|| LanguageError::Unknown(s.to_string()))
    }
}

/// Parses a language for the source side. Any language is allowed.
pub fn parse_source_language(value: &str) -> Result<Language, LanguageError> {
    value.parse()
}

/// Parses a language for the target side, rejecting Auto-detect.
pub fn parse_target_language(value: &str) -> Result<Language, LanguageError> {
    let lang: Language = value.parse()?;
    validate_target(lang)
}

pub const fn validate_target(lang: Language) -> Result<Language, LanguageError> {
    if lang.is_auto() {
        Err(LanguageError::AutoDetectTarget)
    } else {
        Ok(lang)
    }
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for (lang, code) in SUPPORTED_LANGUAGES {
        let note = if lang.is_auto() { " (source only)" } else { "" };
        println!(
            "  {} {}{}",
            Style::code(format!("{code:6}")),
            Style::secondary(lang.label()),
            Style::hint(note)
        );
    }
}
