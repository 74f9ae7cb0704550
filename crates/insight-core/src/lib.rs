//! Record model, loading, and configuration for support-insight.
//!
//! Defines the interaction record shape shared by every analytics operation,
//! JSON loading for caller-supplied record collections, and application
//! configuration.

pub mod config;
pub mod error;
pub mod records;
pub mod types;

pub use config::AppConfig;
pub use error::InsightError;
pub use records::load_records;
pub use types::{
    Channel, ConversationMessage, Emotion, Interaction, Sender, TicketStatus, Urgency,
};
