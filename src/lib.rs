//! # minall - Use LLMs directly from the terminal
//!
//! `minall` sends chat and translation requests to OpenAI-compatible
//! endpoints and prints the streamed reply as it arrives.
//!
//! ## Features
//!
//! - **One-shot questions**: `minall why is the sky blue`
//! - **Pipes**: `git diff | minall pipe -s "review this diff"`
//! - **Chat sessions**: multi-turn conversations with `minall chat`
//! - **Reasoning models**: thinking text is shown between `<think>` markers
//! - **Translation**: `minall trans -t English < notes.md` with translator
//!   models that stream cumulative snapshots
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/minall/config.toml`, created from a
//! template on first run:
//!
//! ```toml
//! default_model = "ds"
//! default_translator = "mt"
//! system_msg = "You are a helpful assistant."
//!
//! [platforms.deepseek]
//! url = "https://api.deepseek.com/chat/completions"
//! api_key_env = "DEEPSEEK_API_KEY"
//!
//! [platforms.deepseek.models.ds]
//! name = "deepseek-chat"
//! type = "chat"
//! ```

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// HTTP client and request bodies.
pub mod client;

/// Configuration file management and model resolution.
pub mod config;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Streaming request drivers.
pub mod quest;

/// Think/answer and snapshot-diff reducers.
pub mod reducer;

/// Server-sent event decoding.
pub mod sse;

/// Terminal UI components (console, spinner, colors).
pub mod ui;
