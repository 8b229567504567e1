use thiserror::Error;

/// Failures raised while running the appointment form.
///
/// Input problems never show up here: a stream that ends early or fails to
/// read just leaves the remaining fields empty.
#[derive(Debug, Error)]
pub enum FormError {
    /// Writing a prompt or the summary to the console failed
    #[error("failed to write to console: {0}")]
    Output(#[from] std::io::Error),
}
