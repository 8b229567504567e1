pub mod appointment_service;

pub use appointment_service::book_appointment;
