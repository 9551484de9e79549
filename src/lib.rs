//! folio: a portfolio site with an embedded persona chat agent.
//!
//! The binary in `main.rs` wires these modules together; integration tests
//! drive them directly.

pub mod chat;
pub mod config;
pub mod console;
pub mod content;
pub mod error;
pub mod llm;
pub mod logger;
pub mod persona;
pub mod site;
