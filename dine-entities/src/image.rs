use std::fmt;

/// Reference to an image hosted on the upstream image CDN.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Returns `None` for blank image ids.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return None;
        }
        Some(Self(id))
    }

    /// Full URL of the image, rendered with the given CDN transformation.
    pub fn url(&self, cdn_base_url: &str, transform: &str) -> String {
        let base = cdn_base_url.trim_end_matches('/');
        let transform = transform.trim_matches('/');
        if transform.is_empty() {
            format!("{base}/{}", self.0)
        } else {
            format!("{base}/{transform}/{}", self.0)
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_ids_are_rejected() {
        assert!(ImageRef::new("").is_none());
        assert!(ImageRef::new("  ").is_none());
    }

    #[test]
    fn build_cdn_url() {
        let img = ImageRef::new("abc123").unwrap();
        assert_eq!(
            "https://cdn.example.org/upload/w_208,h_208/abc123",
            img.url("https://cdn.example.org/upload/", "w_208,h_208")
        );
        assert_eq!(
            "https://cdn.example.org/abc123",
            img.url("https://cdn.example.org", "")
        );
    }
}
