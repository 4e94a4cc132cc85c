//! Assistant MCP tools
//!
//! Chat with the canned nutrition assistant and route voice commands.

use serde::Serialize;

use crate::assistant::{ChatSession, ChatTopic, CommandTarget, VoiceSession};

/// Response for ask_assistant
#[derive(Debug, Serialize)]
pub struct AskAssistantResponse {
    pub topic: ChatTopic,
    pub reply: String,
    pub message_count: usize,
}

/// Response for toggle_assistant
#[derive(Debug, Serialize)]
pub struct ToggleAssistantResponse {
    pub open: bool,
    pub message_count: usize,
}

/// Response for route_voice_command
#[derive(Debug, Serialize)]
pub struct RouteCommandResponse {
    pub transcript: String,
    pub matched: bool,
    pub target: Option<CommandTarget>,
    pub section_id: Option<&'static str>,
}

/// Send a message to the assistant
pub fn ask_assistant(session: &mut ChatSession, message: &str) -> Result<AskAssistantResponse, String> {
    let topic = ChatTopic::detect(message);
    let reply = session
        .send(message)
        .map(|m| m.text.clone())
        .ok_or("Message is empty")?;

    Ok(AskAssistantResponse {
        topic,
        reply,
        message_count: session.messages().len(),
    })
}

/// Open or close the chat widget
pub fn toggle_assistant(session: &mut ChatSession) -> ToggleAssistantResponse {
    let open = session.toggle();
    ToggleAssistantResponse {
        open,
        message_count: session.messages().len(),
    }
}

/// Response for toggle_voice_command
#[derive(Debug, Serialize)]
pub struct ToggleVoiceResponse {
    pub recording: bool,
}

/// Start or stop voice recording
pub fn toggle_voice_command(voice: &mut VoiceSession) -> ToggleVoiceResponse {
    ToggleVoiceResponse {
        recording: voice.toggle(),
    }
}

/// Work out where a voice command points; ends any recording in progress
pub fn route_voice_command(voice: &mut VoiceSession, transcript: &str) -> RouteCommandResponse {
    let target = voice.finish(transcript);
    RouteCommandResponse {
        transcript: transcript.to_string(),
        matched: target.is_some(),
        target,
        section_id: target.and_then(|t| t.section_id()),
    }
}
