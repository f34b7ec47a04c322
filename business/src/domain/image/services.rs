use async_trait::async_trait;

/// A user-supplied image whose bytes may only be available asynchronously
/// (an uploaded file, a file on disk, a camera snapshot).
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// File name as supplied by the user, if any.
    fn name(&self) -> &str;

    /// Declared MIME type. Empty when the source did not declare one.
    fn mime_type(&self) -> &str;

    async fn read_bytes(&self) -> Result<Vec<u8>, std::io::Error>;
}
