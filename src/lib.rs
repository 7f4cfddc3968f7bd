//! # qtr - Quick Translator
//!
//! `qtr` translates short texts between a fixed set of languages by asking a
//! Gemini text-generation model to return only the translation.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//!
//! # Translate an argument
//! qtr --to es "Hello"
//!
//! # Translate from stdin
//! echo "Bonjour" | qtr --from fr --to ja
//!
//! # Interactive session with voice, copy and share
//! qtr chat
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/quick-translator/config.toml`:
//!
//! ```toml
//! [translator]
//! model = "gemini-3-flash-preview"
//! api_key_env = "GEMINI_API_KEY"
//! from = "Auto-detect"
//! to = "English"
//! timeout_secs = 30
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal implementations of platform capabilities.
pub mod platform;

/// UI state and user actions, independent of any front-end.
pub mod shell;

/// Translation client, prompt and language set.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
