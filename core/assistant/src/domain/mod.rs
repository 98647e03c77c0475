//! assistant 固有のドメイン型（型と不変条件）

pub mod command;
pub mod conversation;
pub mod message;
pub mod mode;
pub mod outcome;
pub mod profile;
pub mod role;

pub use command::SessionCommand;
pub use conversation::{Conversation, PayloadMessage};
pub use message::Message;
pub use mode::system_instruction_for_mode;
pub use outcome::Outcome;
pub use profile::Profile;
pub use role::Role;
