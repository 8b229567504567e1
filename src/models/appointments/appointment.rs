use serde::Serialize;
use std::fmt;

/// A single appointment as typed in at the console. Nothing is validated,
/// every field is whatever text the user entered (possibly empty).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub date: String, // expected YYYY-MM-DD
    pub time: String, // expected HH:MM
    pub name: String,
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Appointment Details:")?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Time: {}", self.time)?;
        writeln!(f, "Name: {}", self.name)
    }
}
