//! Phrase spell fixer backed by a remote spellchecking service.
//!
//! A phrase is split into words, every word is checked concurrently, the
//! misspelled ones are looked up concurrently, and the top suggestions are
//! folded back into the phrase.
//!
//! * [`config`]: TOML settings and platform paths.
//! * [`service`]: the HTTP client for `/misspelled` and `/corrections`.
//! * [`pipeline`]: tokenize, check, correct, fold, and the observable state.
//! * [`app`] / [`cli`]: the text front end used by the binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod service;
