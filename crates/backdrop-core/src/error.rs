use thiserror::Error;

/// Why the accelerated renderer could not be brought up.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    #[error("drawing surface unavailable: {0}")]
    Surface(String),
    #[error("no compatible GPU adapter")]
    Adapter,
    #[error("GPU device request failed: {0}")]
    Device(String),
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
}

/// The rendering backend never became available within the polling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rendering backend unavailable after {attempts} polls")]
pub struct NotReady {
    pub attempts: u32,
}
