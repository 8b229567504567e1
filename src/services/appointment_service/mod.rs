pub mod form;

pub use form::{book_appointment, DATE_PROMPT, NAME_PROMPT, TIME_PROMPT};
