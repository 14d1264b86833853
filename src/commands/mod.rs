pub mod handler;
pub mod parser;

pub use handler::CommandHandler;
pub use parser::{parse_command, parse_target_doses, Command, CommandError};
