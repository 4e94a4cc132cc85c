//! Assistant module
//!
//! Keyword-driven chatbot and voice command routing. Neither does real
//! language understanding.

pub mod chat;
pub mod commands;

pub use chat::{reply, ChatMessage, ChatRole, ChatSession, ChatTopic};
pub use commands::{route_command, CommandTarget, VoiceSession};
