use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("target parse error: {0}")]
    Parse(String),
}
