//! Error types for the lexer and the program around it.
//!
//! - Lexical diagnostics (`LexError`, `Error`): never raised, they travel
//!   inside error tokens and can be rendered with a source position
//! - Application errors (`AppError`): I/O, configuration and logging setup

pub mod errors;
