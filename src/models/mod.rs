// src/models/mod.rs

pub mod app;
pub mod appointments;

pub use app::AppConfig;
pub use appointments::Appointment;
