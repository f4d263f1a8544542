//! Gist export and image download helpers.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use chrono::{DateTime, Utc};
use image::ImageFormat;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::core::lifecycle::ImageReference;
use crate::error::ActionError;

const GIST_BASE_URL: &str = "https://gist.github.com/";
const GIST_FILENAME: &str = "generated-code.ts";
const GIST_DESCRIPTION: &str = "AI Generated Code";

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Gist creation URL prefilled with `content`.
pub fn gist_url(content: &str) -> String {
    format!(
        "{}?filename={}&description={}&content={}",
        GIST_BASE_URL,
        encode_uri_component(GIST_FILENAME),
        encode_uri_component(GIST_DESCRIPTION),
        encode_uri_component(content)
    )
}

pub fn download_filename(now: DateTime<Utc>) -> String {
    format!("ai-generated-{}.png", now.timestamp_millis())
}

/// Where the bytes of an image reference come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Inline { mime: String, bytes: Vec<u8> },
    Remote(String),
}

pub fn parse_image_reference(reference: &ImageReference) -> Result<ImageSource, ActionError> {
    let raw = reference.as_str().trim();
    if raw.is_empty() {
        return Err(ActionError::Download("Image reference is empty".to_string()));
    }
    if !reference.is_data_uri() {
        return Ok(ImageSource::Remote(raw.to_string()));
    }
    let rest = &raw["data:".len()..];

    let (header, data) = rest
        .split_once(',')
        .ok_or_else(|| ActionError::Download("Malformed data URI".to_string()))?;
    let (mime, is_base64) = match header.strip_suffix(";base64") {
        Some(mime) => (mime, true),
        None => (header, false),
    };

    let bytes = if is_base64 {
        base64::engine::general_purpose::STANDARD
            .decode(data.trim())
            .map_err(|err| ActionError::Download(format!("Invalid base64 image data: {}", err)))?
    } else {
        urlencoding::decode_binary(data.as_bytes()).into_owned()
    };

    let mime = if mime.is_empty() { "text/plain" } else { mime };
    Ok(ImageSource::Inline {
        mime: mime.to_string(),
        bytes,
    })
}

async fn fetch_image_bytes(source: ImageSource) -> Result<Vec<u8>, ActionError> {
    match source {
        ImageSource::Inline { mime, bytes } => {
            tracing::debug!(%mime, bytes = bytes.len(), "using inline image data");
            Ok(bytes)
        }
        ImageSource::Remote(url) => {
            let response = reqwest::get(&url)
                .await
                .map_err(|err| ActionError::Download(format!("Failed to fetch image: {}", err)))?;
            let status = response.status();
            if !status.is_success() {
                return Err(ActionError::Download(format!(
                    "Image request failed: {}",
                    status
                )));
            }
            response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|err| ActionError::Download(format!("Failed to read image bytes: {}", err)))
        }
    }
}

/// Returns PNG bytes, transcoding other formats.
pub fn ensure_png(bytes: Vec<u8>) -> Result<Vec<u8>, ActionError> {
    if matches!(image::guess_format(&bytes), Ok(ImageFormat::Png)) {
        return Ok(bytes);
    }
    let decoded = image::load_from_memory(&bytes)
        .map_err(|err| ActionError::Download(format!("Unsupported image data: {}", err)))?;
    let mut out = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|err| ActionError::Download(format!("Failed to encode PNG: {}", err)))?;
    Ok(out)
}

/// Resolves `reference` to PNG bytes and writes them to `destination`.
pub async fn save_image(reference: &ImageReference, destination: &Path) -> Result<(), ActionError> {
    let source = parse_image_reference(reference)?;
    let bytes = fetch_image_bytes(source).await?;
    let png = ensure_png(bytes)?;
    tokio::fs::write(destination, &png)
        .await
        .map_err(|err| ActionError::Download(format!("Failed to write {}: {}", destination.display(), err)))?;
    tracing::info!(path = %destination.display(), bytes = png.len(), "image saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use image::{Rgb, RgbImage};

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_pixel(4, 4, Rgb([200, 40, 40]));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), format).unwrap();
        out
    }

    #[test]
    fn test_gist_url_encodes_like_uri_component() {
        let url = gist_url("let x = a & b;\n// done (ok)!");
        assert_eq!(
            url,
            "https://gist.github.com/?filename=generated-code.ts\
             &description=AI%20Generated%20Code\
             &content=let%20x%20%3D%20a%20%26%20b%3B%0A%2F%2F%20done%20(ok)!"
        );
    }

    #[test]
    fn test_download_filename_embeds_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(download_filename(now), "ai-generated-1700000000123.png");
    }

    #[test]
    fn test_parse_base64_data_uri() {
        let reference = ImageReference("data:image/png;base64,aGVsbG8=".to_string());
        assert_eq!(
            parse_image_reference(&reference).unwrap(),
            ImageSource::Inline {
                mime: "image/png".to_string(),
                bytes: b"hello".to_vec(),
            }
        );
    }

    #[test]
    fn test_parse_percent_encoded_data_uri() {
        let reference = ImageReference("data:image/svg+xml,%3Csvg%2F%3E".to_string());
        assert_eq!(
            parse_image_reference(&reference).unwrap(),
            ImageSource::Inline {
                mime: "image/svg+xml".to_string(),
                bytes: b"<svg/>".to_vec(),
            }
        );
    }

    #[test]
    fn test_parse_remote_and_malformed() {
        let remote = ImageReference("https://cdn.example/fox.png".to_string());
        assert_eq!(
            parse_image_reference(&remote).unwrap(),
            ImageSource::Remote("https://cdn.example/fox.png".to_string())
        );
        assert!(parse_image_reference(&ImageReference("data:image/png".to_string())).is_err());
        assert!(parse_image_reference(&ImageReference("  ".to_string())).is_err());
    }

    #[test]
    fn test_ensure_png_passthrough_and_transcode() {
        let png = encode(ImageFormat::Png);
        assert_eq!(ensure_png(png.clone()).unwrap(), png);

        let jpeg = encode(ImageFormat::Jpeg);
        let converted = ensure_png(jpeg).unwrap();
        assert!(converted.starts_with(PNG_SIGNATURE));

        assert!(ensure_png(b"not an image".to_vec()).is_err());
    }

    #[tokio::test]
    async fn test_save_image_writes_png() {
        let png = encode(ImageFormat::Png);
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        let reference = ImageReference(format!("data:image/png;base64,{}", encoded));
        let path = std::env::temp_dir().join(format!("ai-studio-test-{}.png", uuid::Uuid::new_v4()));

        save_image(&reference, &path).await.unwrap();
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(written, png);
    }
}
