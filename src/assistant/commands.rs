//! Voice command routing
//!
//! Maps a spoken or typed transcript to the page section it asks for.

use serde::Serialize;

/// Navigation targets a command can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandTarget {
    Home,
    AiDiet,
    MealTracker,
    Analytics,
    Community,
    /// Toggle the chat widget rather than scroll
    Chatbot,
}

impl CommandTarget {
    /// Section id the UI scrolls to, `None` for the chat toggle
    pub fn section_id(&self) -> Option<&'static str> {
        match self {
            CommandTarget::Home => Some("home"),
            CommandTarget::AiDiet => Some("ai-diet"),
            CommandTarget::MealTracker => Some("meal-tracker"),
            CommandTarget::Analytics => Some("analytics"),
            CommandTarget::Community => Some("community"),
            CommandTarget::Chatbot => None,
        }
    }
}

const COMMAND_KEYWORDS: [(CommandTarget, &[&str]); 6] = [
    (CommandTarget::Home, &["beranda", "home"]),
    (CommandTarget::AiDiet, &["diet"]),
    (CommandTarget::MealTracker, &["tracking", "meal"]),
    (CommandTarget::Analytics, &["analisis", "analytics"]),
    (CommandTarget::Community, &["komunitas", "community"]),
    (CommandTarget::Chatbot, &["chatbot", "bantuan"]),
];

/// Route a transcript to a target; first matching keyword group wins
pub fn route_command(transcript: &str) -> Option<CommandTarget> {
    let lower = transcript.to_lowercase();
    let target = COMMAND_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(target, _)| *target);

    if target.is_none() {
        tracing::debug!("No command matched transcript '{}'", transcript);
    }
    target
}

/// Voice command button state
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct VoiceSession {
    recording: bool,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Start recording if idle, stop if recording. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }

    /// Handle a finished transcript: recording stops and the command is routed
    pub fn finish(&mut self, transcript: &str) -> Option<CommandTarget> {
        self.recording = false;
        route_command(transcript)
    }
}
