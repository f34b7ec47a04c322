use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::services::ImageSource;

/// An image already held in memory: an upload or a camera snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

#[async_trait]
impl ImageSource for ImageFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, std::io::Error> {
        Ok(self.bytes.clone())
    }
}

/// An image on the local filesystem, read lazily when encoded.
#[derive(Debug, Clone)]
pub struct LocalImageFile {
    path: PathBuf,
    name: String,
    mime_type: String,
}

impl LocalImageFile {
    /// The MIME type is inferred from the file extension; unknown extensions
    /// leave it empty so the encoder sniffs the content instead.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = image::ImageFormat::from_path(&path)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_default();

        Self {
            path,
            name,
            mime_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ImageSource for LocalImageFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, std::io::Error> {
        tokio::fs::read(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_infer_mime_from_extension() {
        let file = LocalImageFile::new("/tmp/photos/jar.PNG");
        assert_eq!(file.name(), "jar.PNG");
        assert_eq!(file.mime_type(), "image/png");
    }

    #[test]
    fn should_leave_mime_empty_for_unknown_extension() {
        let file = LocalImageFile::new("/tmp/photos/jar.unknown");
        assert_eq!(file.mime_type(), "");
    }

    #[tokio::test]
    async fn should_fail_reading_missing_file() {
        let file = LocalImageFile::new("/definitely/not/here/bottle.jpg");
        assert!(file.read_bytes().await.is_err());
    }
}
