use thiserror::Error;

/// Front-end errors: wraps the engine's [`gatesim::GateError`] and adds
/// the I/O and text-format failures the parsers and CLI loop can hit.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] gatesim::GateError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
}
