use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("sample {index} is timestamped before its predecessor")]
    UnsortedTimestamps { index: usize },
    #[error("series x is not ascending at index {index}")]
    UnsortedSeries { index: usize },
    #[error("series arrays differ in length: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
