use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentimentError {
    /// A request that requires text arrived with none.
    #[error("no text provided")]
    EmptyText,
}
