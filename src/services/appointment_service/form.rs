use crate::error::FormError;
use crate::models::Appointment;
use crate::utils::ConsoleInput;
use log::debug;
use std::io::{BufRead, Write};

pub const DATE_PROMPT: &str = "Enter appointment date (YYYY-MM-DD): ";
pub const TIME_PROMPT: &str = "Enter appointment time (HH:MM): ";
pub const NAME_PROMPT: &str = "Enter your name: ";

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), FormError> {
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Asks for date, time and name (in that order), then prints the record
/// back. Missing input leaves the field empty; it is never re-asked.
pub fn book_appointment<R, W>(input: R, output: &mut W) -> Result<Appointment, FormError>
where
    R: BufRead,
    W: Write,
{
    let mut console = ConsoleInput::new(input);
    let mut appointment = Appointment::default();

    prompt(output, DATE_PROMPT)?;
    if let Some(date) = console.read_token() {
        appointment.date = date;
    }
    debug!("Captured date {:?}", appointment.date);

    prompt(output, TIME_PROMPT)?;
    if let Some(time) = console.read_token() {
        appointment.time = time;
    }
    debug!("Captured time {:?}", appointment.time);

    prompt(output, NAME_PROMPT)?;
    console.skip_line_terminator();
    if let Some(name) = console.read_line() {
        appointment.name = name;
    }
    debug!("Captured name {:?}", appointment.name);

    if console.is_exhausted() {
        debug!("Reached end of input while filling the form");
    }

    write!(output, "\n{}", appointment)?;
    output.flush()?;

    match serde_json::to_string(&appointment) {
        Ok(json) => debug!("Appointment recorded: {}", json),
        Err(e) => debug!("Could not encode appointment for logging: {}", e),
    }

    Ok(appointment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{self, Cursor};

    fn run(text: &str) -> (Appointment, String) {
        let mut out = Vec::new();
        let appointment = book_appointment(Cursor::new(text.as_bytes()), &mut out).unwrap();
        (appointment, String::from_utf8(out).unwrap())
    }

    #[test]
    fn echoes_the_three_fields() {
        let (appointment, out) = run("2024-05-01\n14:30\nJane Doe\n");

        assert_eq!(appointment.date, "2024-05-01");
        assert_eq!(appointment.time, "14:30");
        assert_eq!(appointment.name, "Jane Doe");
        assert!(out.ends_with("Date: 2024-05-01\nTime: 14:30\nName: Jane Doe\n"));
    }

    #[test]
    fn writes_prompts_then_summary() {
        let (_, out) = run("2024-05-01\n14:30\nJane Doe\n");

        assert_eq!(
            out,
            "Enter appointment date (YYYY-MM-DD): \
             Enter appointment time (HH:MM): \
             Enter your name: \
             \nAppointment Details:\nDate: 2024-05-01\nTime: 14:30\nName: Jane Doe\n"
        );
    }

    #[rstest]
    #[case("2024-05-01\n", "2024-05-01", "", "")]
    #[case("2024-05-01", "2024-05-01", "", "")]
    #[case("2024-05-01\n14:30\n", "2024-05-01", "14:30", "")]
    #[case("", "", "", "")]
    fn short_input_leaves_fields_empty(
        #[case] text: &str,
        #[case] date: &str,
        #[case] time: &str,
        #[case] name: &str,
    ) {
        let (appointment, out) = run(text);

        assert_eq!(appointment.date, date);
        assert_eq!(appointment.time, time);
        assert_eq!(appointment.name, name);
        assert!(out.ends_with(&format!("Date: {}\nTime: {}\nName: {}\n", date, time, name)));
    }

    #[test]
    fn prompts_exactly_once_each() {
        let (_, out) = run("not-a-date\nnope\n\n");

        assert_eq!(out.matches(DATE_PROMPT).count(), 1);
        assert_eq!(out.matches(TIME_PROMPT).count(), 1);
        assert_eq!(out.matches(NAME_PROMPT).count(), 1);
        assert_eq!(out.matches("Appointment Details:").count(), 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_reported() {
        let result = book_appointment(Cursor::new(&b"a\nb\nc\n"[..]), &mut BrokenPipe);
        assert!(matches!(result, Err(FormError::Output(_))));
    }
}
