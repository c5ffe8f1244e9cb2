//! Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: ChatPageVm with RwSignals
//! - view.rs: Main component ChatPage
//! - message_bubble.rs: Component for displaying one chat turn

mod message_bubble;
mod model;
mod view;
mod view_model;

pub use message_bubble::MessageBubble;
pub use view::ChatPage;
pub use view_model::{ChatEntry, ChatPageVm, EntryKind};
