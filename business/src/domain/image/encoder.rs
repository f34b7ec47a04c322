use super::errors::ImageError;
use super::model::{ImagePayload, sniff_mime_type};
use super::services::ImageSource;

/// Reads the source once and produces its transfer-ready payload.
///
/// The payload keeps the declared MIME type; only a source that declares none
/// gets one sniffed from its content. Read failures surface as
/// [`ImageError::ReadFailed`].
pub async fn encode(source: &dyn ImageSource) -> Result<ImagePayload, ImageError> {
    let bytes = source.read_bytes().await?;

    let declared = source.mime_type().trim();
    let mime_type = if declared.is_empty() {
        sniff_mime_type(&bytes)
    } else {
        declared.to_string()
    };

    Ok(ImagePayload::from_bytes(&bytes, mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::sources::{ImageFile, LocalImageFile};
    use proptest::prelude::*;

    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[tokio::test]
    async fn should_keep_declared_mime_type() {
        let file = ImageFile::new("jar.webp", "image/webp", vec![1, 2, 3]);

        let payload = encode(&file).await.unwrap();

        assert_eq!(payload.mime_type(), "image/webp");
        assert_eq!(payload.data(), "AQID");
    }

    #[tokio::test]
    async fn should_sniff_mime_type_when_undeclared() {
        let file = ImageFile::new("photo", "", JPEG_MAGIC.to_vec());

        let payload = encode(&file).await.unwrap();

        assert_eq!(payload.mime_type(), "image/jpeg");
    }

    #[tokio::test]
    async fn should_return_read_failed_when_file_is_missing() {
        let file = LocalImageFile::new("/definitely/not/here/can.png");

        let result = encode(&file).await;

        assert!(matches!(result, Err(ImageError::ReadFailed(_))));
    }

    proptest! {
        #[test]
        fn encoded_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let file = ImageFile::new("blob.bin", "image/png", bytes.clone());

            let payload = runtime.block_on(encode(&file)).unwrap();

            prop_assert_eq!(payload.mime_type(), "image/png");
            prop_assert_eq!(payload.decode().unwrap(), bytes);
        }
    }
}
