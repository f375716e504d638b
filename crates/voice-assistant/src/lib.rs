//! Voice-control loop around the move resolver: configuration, the speech
//! boundary and the per-utterance session.

pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod speech;

pub use config::AssistantConfig;
pub use error::AssistantError;
pub use session::{Response, Session};
pub use speech::{ConsoleSpeaker, RecordingSpeaker, Speaker};
