//! Canned nutrition chatbot
//!
//! Replies are picked by keyword, not understood. The first matching topic
//! wins, so a message mentioning both "protein" and "weight" gets the
//! protein answer. Keywords cover English and Indonesian.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Topics the chatbot has a canned answer for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    Calories,
    Protein,
    Diet,
    Exercise,
    Weight,
    Greeting,
}

/// Keywords per topic, in match priority order
const TOPIC_KEYWORDS: [(ChatTopic, &[&str]); 5] = [
    (ChatTopic::Calories, &["kalori", "calorie"]),
    (ChatTopic::Protein, &["protein"]),
    (ChatTopic::Diet, &["diet", "makanan"]),
    (ChatTopic::Exercise, &["olahraga", "exercise"]),
    (ChatTopic::Weight, &["berat badan", "weight"]),
];

impl ChatTopic {
    /// Classify a message by keyword
    pub fn detect(message: &str) -> Self {
        let lower = message.to_lowercase();
        TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(ChatTopic::Greeting)
    }

    pub fn reply(&self) -> &'static str {
        match self {
            ChatTopic::Calories => CALORIES_REPLY,
            ChatTopic::Protein => PROTEIN_REPLY,
            ChatTopic::Diet => DIET_REPLY,
            ChatTopic::Exercise => EXERCISE_REPLY,
            ChatTopic::Weight => WEIGHT_REPLY,
            ChatTopic::Greeting => GREETING_REPLY,
        }
    }
}

const CALORIES_REPLY: &str = "Calories are the unit of energy your body needs. \
Adults typically need 1500-2500 kcal per day depending on activity and goals. \
Tip: estimate your daily needs from your weight, height, age and activity level. \
Want me to help calculate yours?";

const PROTEIN_REPLY: &str = "Protein builds muscle and repairs cells. \
Sources: chicken, fish, eggs, beans, milk and soy products. \
Daily target: 0.8-1.2 g per kg of body weight. \
Tip: include protein in every meal to stay full longer.";

const DIET_REPLY: &str = "A balanced diet consists of:
- Carbohydrates: 45-65%
- Protein: 15-25%
- Fat: 20-35%
Focus on whole foods, vegetables, fruit and lean protein. \
Limit processed food, sugary drinks and fried food.";

const EXERCISE_REPLY: &str = "Regular exercise matters:
- Cardio: brisk walking, running, cycling, swimming (150 minutes/week)
- Strength training: weights, resistance bands, push-ups, squats (2-3x/week)
- Flexibility and mobility: stretching, yoga, pilates
Tip: start light and increase intensity gradually.";

const WEIGHT_REPLY: &str = "To lose weight:
- Create a calorie deficit of 300-500 kcal/day
- Combine healthy eating with regular exercise
- Prioritize protein and fiber to stay full longer
- Track your weight weekly to review progress";

const GREETING_REPLY: &str =
    "Thanks for visiting BestiNut! Hope your day gets better and you keep living healthy.";

/// Canned reply for a user message
pub fn reply(message: &str) -> &'static str {
    ChatTopic::detect(message).reply()
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Messages kept in a session transcript; the oldest are dropped first
pub const MAX_TRANSCRIPT_MESSAGES: usize = 100;

/// Chat widget state: open flag plus the recent transcript
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatSession {
    open: bool,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the chat if closed, close it if open. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message and the canned reply.
    ///
    /// Blank input is ignored and returns `None`. Sending opens the chat.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.open = true;
        let topic = ChatTopic::detect(text);
        tracing::debug!("Chat message matched topic {:?}", topic);

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: text.to_string(),
            sent_at: Utc::now(),
        });
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: topic.reply().to_string(),
            sent_at: Utc::now(),
        });
        if self.messages.len() > MAX_TRANSCRIPT_MESSAGES {
            let excess = self.messages.len() - MAX_TRANSCRIPT_MESSAGES;
            self.messages.drain(..excess);
        }
        self.messages.last()
    }
}
