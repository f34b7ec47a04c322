#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.read_failed")]
    ReadFailed(#[from] std::io::Error),
    #[error("image.invalid_encoding")]
    InvalidEncoding,
}
