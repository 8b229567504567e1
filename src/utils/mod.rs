pub mod input_utils;
pub mod log_utils;

pub use input_utils::ConsoleInput;
pub use log_utils::init_logging;
