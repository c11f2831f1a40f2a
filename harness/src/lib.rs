pub mod command;
pub mod error;
pub mod protocol;
pub mod session;
pub mod strategy;
pub mod turn;

pub use command::Command;
pub use error::Error;
pub use protocol::{Harness, Phase};
pub use session::{Session, StartSchema};
pub use strategy::Strategy;
pub use turn::TurnCounter;
