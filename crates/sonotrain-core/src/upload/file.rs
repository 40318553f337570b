use crate::config::FALLBACK_MIME;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// One user-selected image, ready for upload.
///
/// A file's identity within a submission is its index; names are display-only
/// and may collide.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Build from a file name and raw bytes, deriving the MIME type from the
    /// file extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_for_name(&name).to_string();
        Self { name, mime, bytes }
    }

    /// Inline `data:` URL for thumbnail rendering.
    ///
    /// Unlike a browser object URL this needs no revocation and renders
    /// identically in desktop webviews.
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
    }
}

/// Map a file extension to its image MIME type.
fn mime_for_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(ImageFile::new("lung.png", vec![]).mime, "image/png");
        assert_eq!(ImageFile::new("scan.JPG", vec![]).mime, "image/jpeg");
        assert_eq!(ImageFile::new("clip.webp", vec![]).mime, "image/webp");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(ImageFile::new("notes.txt", vec![]).mime, FALLBACK_MIME);
        assert_eq!(ImageFile::new("noextension", vec![]).mime, FALLBACK_MIME);
    }

    #[test]
    fn test_preview_data_url_shape() {
        let file = ImageFile::new("dot.png", vec![1, 2, 3]);
        let url = file.preview_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        // 3 bytes -> 4 base64 chars
        assert!(url.ends_with("AQID"));
    }
}
