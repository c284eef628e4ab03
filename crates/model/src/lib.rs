pub mod minutes;
pub mod session;

pub use minutes::{ActionItem, MeetingMinutes};
pub use session::{ConversationHistory, ConversationTurn, MeetingSession, SessionStatus, TurnRole};
