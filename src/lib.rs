pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::FormError;
pub use models::{AppConfig, Appointment};
pub use services::book_appointment;
pub use utils::{init_logging, ConsoleInput};
