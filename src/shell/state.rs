use crate::translation::{Language, LanguageError, validate_target};

/// Everything the interaction surface shows. Lives only as long as the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    source: Language,
    target: Language,
    pub input_text: String,
    pub output_text: String,
    pub is_loading: bool,
    pub is_listening: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            source: Language::DEFAULT_SOURCE,
            target: Language::DEFAULT_TARGET,
            input_text: String::new(),
            output_text: String::new(),
            is_loading: false,
            is_listening: false,
        }
    }
}

impl ShellState {
    /// Creates a state with the given language pair.
    pub fn with_languages(source: Language, target: Language) -> Result<Self, LanguageError> {
        Ok(Self {
            source,
            target: validate_target(target)?,
            ..Self::default()
        })
    }

    pub const fn source(&self) -> Language {
        self.source
    }

    pub const fn target(&self) -> Language {
        self.target
    }

    pub const fn set_source(&mut self, lang: Language) {
        self.source = lang;
    }

    /// Sets the target language. Auto-detect is rejected and the old value kept.
    pub fn set_target(&mut self, lang: Language) -> Result<(), LanguageError> {
        self.target = validate_target(lang)?;
        Ok(())
    }

    /// True when the input holds something worth translating.
    pub fn has_input(&self) -> bool {
        !self.input_text.trim().is_empty()
    }
}
