//! Submission sink: where validated form data goes

mod log_sink;
mod traits;

pub use log_sink::LogSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
