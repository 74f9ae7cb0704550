use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One customer-support exchange, bot- and/or agent-handled.
///
/// Records are immutable inputs: the analytics layer reads them but never
/// mutates them, so the same collection can be re-aggregated freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "interaction_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub session_id: String,
    pub channel: Channel,
    /// Free-form intent category, e.g. "order_inquiry".
    pub intent: String,
    pub urgency: Urgency,
    /// The customer's expressed state at the record level.
    pub emotion: Emotion,
    /// System confidence in its handling, 0.0..=1.0.
    pub confidence: f64,
    pub customer_message: String,
    pub bot_response: String,
    /// Chronologically ordered transcript; may be empty.
    #[serde(default)]
    pub conversation_history: Vec<ConversationMessage>,
    pub action_taken: String,
    /// Whether the interaction was resolved successfully.
    pub success: bool,
    /// System processing latency in milliseconds.
    pub execution_time_ms: u64,
    /// Whether the interaction was escalated to a human agent.
    pub is_handoff: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handoff_reason: Option<String>,
    /// Set when a human agent took the interaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<String>,
    pub ticket_status: TicketStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_time_seconds: Option<f64>,
    /// 1-5 scale.
    pub customer_satisfaction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_comment: Option<String>,
    /// Arbitrary metadata attached to this interaction.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Interaction {
    /// A blank record with neutral defaults; fields are public, so callers
    /// (and fixtures) fill in what they need.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            session_id: String::new(),
            channel: Channel::Chat,
            intent: String::new(),
            urgency: Urgency::Low,
            emotion: Emotion::Neutral,
            confidence: 0.0,
            customer_message: String::new(),
            bot_response: String::new(),
            conversation_history: Vec::new(),
            action_taken: String::new(),
            success: false,
            execution_time_ms: 0,
            is_handoff: false,
            handoff_reason: None,
            assigned_agent: None,
            ticket_status: TicketStatus::Open,
            resolved_at: None,
            resolution_time_seconds: None,
            customer_satisfaction: 3.0,
            feedback_comment: None,
            metadata: HashMap::new(),
        }
    }
}

/// A single message in a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub timestamp: DateTime<Utc>,
    pub sender: Sender,
    pub message: String,
    /// Free-form emotion tag; wider than the record-level [`Emotion`] enum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
}

impl ConversationMessage {
    pub fn customer(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            sender: Sender::Customer,
            message: message.into(),
            emotion: None,
        }
    }

    pub fn bot(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            sender: Sender::Bot,
            message: message.into(),
            emotion: None,
        }
    }

    pub fn agent(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            sender: Sender::Agent,
            message: message.into(),
            emotion: None,
        }
    }

    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }
}

/// Channel an interaction arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Chat,
    Phone,
    Email,
    Sms,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Chat, Channel::Phone, Channel::Email, Channel::Sms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Chat => "chat",
            Channel::Phone => "phone",
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }
}

/// Ordered priority classification of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Low,
        Urgency::Medium,
        Urgency::High,
        Urgency::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }
}

/// Record-level customer emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Neutral,
    Negative,
    Frustrated,
    Satisfied,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Positive,
        Emotion::Neutral,
        Emotion::Negative,
        Emotion::Frustrated,
        Emotion::Satisfied,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Neutral => "neutral",
            Emotion::Negative => "negative",
            Emotion::Frustrated => "frustrated",
            Emotion::Satisfied => "satisfied",
        }
    }
}

/// Who sent a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Customer,
    Bot,
    Agent,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Customer => "customer",
            Sender::Bot => "bot",
            Sender::Agent => "agent",
        }
    }
}

/// Ticket lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// A ticket still counts as an active issue unless resolved or closed.
    pub fn is_open(&self) -> bool {
        !matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(
            serde_json::to_value(TicketStatus::InProgress).unwrap(),
            "in_progress"
        );
        assert_eq!(serde_json::to_value(Channel::Sms).unwrap(), "sms");
        assert_eq!(serde_json::to_value(Urgency::Critical).unwrap(), "critical");
        assert_eq!(serde_json::to_value(Emotion::Frustrated).unwrap(), "frustrated");
        assert_eq!(serde_json::to_value(Sender::Customer).unwrap(), "customer");
    }

    #[test]
    fn test_urgency_ordering() {
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::High);
        assert!(Urgency::High < Urgency::Critical);
    }

    #[test]
    fn test_ticket_status_is_open() {
        assert!(TicketStatus::Open.is_open());
        assert!(TicketStatus::InProgress.is_open());
        assert!(!TicketStatus::Resolved.is_open());
        assert!(!TicketStatus::Closed.is_open());
    }

    #[test]
    fn test_interaction_wire_shape() {
        let json = r#"{
            "interaction_id": "int-001",
            "created_at": "2024-01-27T10:30:00Z",
            "session_id": "sess-001",
            "channel": "chat",
            "intent": "order_inquiry",
            "urgency": "high",
            "emotion": "frustrated",
            "confidence": 0.87,
            "customer_message": "My order is delayed",
            "bot_response": "Let me check that for you",
            "conversation_history": [
                {
                    "timestamp": "2024-01-27T10:30:00Z",
                    "sender": "customer",
                    "message": "My order is delayed",
                    "emotion": "frustrated"
                },
                {
                    "timestamp": "2024-01-27T10:30:15Z",
                    "sender": "bot",
                    "message": "Let me check that for you"
                }
            ],
            "action_taken": "order_lookup",
            "success": true,
            "execution_time_ms": 1200,
            "is_handoff": true,
            "handoff_reason": "complex_issue",
            "assigned_agent": "Sarah Chen",
            "ticket_status": "in_progress",
            "resolution_time_seconds": 340.5,
            "customer_satisfaction": 4,
            "feedback_comment": "Quick help, thanks",
            "metadata": {"order_id": "ORDER-12345"}
        }"#;

        let record: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "int-001");
        assert_eq!(record.channel, Channel::Chat);
        assert_eq!(record.urgency, Urgency::High);
        assert_eq!(record.ticket_status, TicketStatus::InProgress);
        assert_eq!(record.assigned_agent.as_deref(), Some("Sarah Chen"));
        assert_eq!(record.resolution_time_seconds, Some(340.5));
        assert_eq!(record.conversation_history.len(), 2);
        assert_eq!(record.conversation_history[0].sender, Sender::Customer);
        assert_eq!(
            record.conversation_history[0].emotion.as_deref(),
            Some("frustrated")
        );
        assert!(record.conversation_history[1].emotion.is_none());

        // Optional fields and metadata survive a round trip.
        let back = serde_json::to_string(&record).unwrap();
        let reparsed: Interaction = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed.id, record.id);
        assert_eq!(reparsed.handoff_reason, record.handoff_reason);
        assert_eq!(reparsed.metadata["order_id"], "ORDER-12345");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "interaction_id": "int-002",
            "created_at": "2024-01-27T11:00:00Z",
            "session_id": "sess-002",
            "channel": "email",
            "intent": "billing",
            "urgency": "low",
            "emotion": "neutral",
            "confidence": 0.95,
            "customer_message": "Invoice question",
            "bot_response": "Here is your invoice",
            "action_taken": "invoice_lookup",
            "success": true,
            "execution_time_ms": 400,
            "is_handoff": false,
            "ticket_status": "resolved",
            "customer_satisfaction": 5
        }"#;

        let record: Interaction = serde_json::from_str(json).unwrap();
        assert!(record.handoff_reason.is_none());
        assert!(record.assigned_agent.is_none());
        assert!(record.resolution_time_seconds.is_none());
        assert!(record.conversation_history.is_empty());
        assert!(record.metadata.is_empty());
    }

    #[test]
    fn test_message_constructors() {
        let msg = ConversationMessage::customer("hello").with_emotion("frustrated");
        assert_eq!(msg.sender, Sender::Customer);
        assert_eq!(msg.emotion.as_deref(), Some("frustrated"));

        let msg = ConversationMessage::bot("hi there");
        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.emotion.is_none());

        let msg = ConversationMessage::agent("taking over");
        assert_eq!(msg.sender, Sender::Agent);
    }

    #[test]
    fn test_unknown_enum_string_rejected() {
        let result: std::result::Result<Channel, _> = serde_json::from_str("\"fax\"");
        assert!(result.is_err());
    }
}
