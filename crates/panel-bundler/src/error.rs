use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading the build environment failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config errors, including those raised by a transform hook
    #[error(transparent)]
    Config(#[from] panel_config::ConfigError),
}
