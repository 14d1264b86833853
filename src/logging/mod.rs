pub mod logger;

pub use logger::{init_logger, print_chat};
