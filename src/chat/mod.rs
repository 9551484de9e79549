//! Chat client: transcript, outbound request, error classification and
//! reply formatting.
//!
//! ```text
//! submit(text) ─▶ ChatController ─▶ Assistant::reply ─▶ LlmProvider
//!                      │                   │
//!                      │             classifier (on error)
//!                      ▼
//!              watch<TranscriptView> ─▶ subscribers ─▶ formatter
//! ```

pub mod assistant;
pub mod classifier;
pub mod connectivity;
pub mod formatter;
pub mod transcript;

pub use assistant::{Assistant, Reply, ReplySource};
pub use classifier::{FailureKind, Fallbacks};
pub use connectivity::Connectivity;
pub use formatter::{Block, Inline, format_reply, render_html, render_terminal};
pub use transcript::{ChatController, Ignored, Message, Role, Submission, TranscriptView};
