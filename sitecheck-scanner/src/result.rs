use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Outcome of fetching a page with GET. The body is only populated for
/// statuses below 400.
#[derive(Debug, Clone)]
pub struct PageFetch {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Outcome of a HEAD request, with the response headers retained so callers
/// can inspect security headers and content-length.
#[derive(Debug, Clone)]
pub struct HeadFetch {
    pub status: u16,
    pub headers: HeaderMap,
}

impl HeadFetch {
    pub fn content_length(&self) -> Option<u64> {
        self.header_value("content-length")
            .and_then(|v| v.parse().ok())
    }

    pub fn header_value(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

/// Reachability status of a single extracted link. Status 0 means no
/// response was obtained at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheck {
    pub url: String,
    pub status: u16,
}

impl LinkCheck {
    pub fn is_ok(&self) -> bool {
        self.status > 0 && self.status < 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_content_length_parses_numeric_header() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("130000"));
        let head = HeadFetch {
            status: 200,
            headers,
        };
        assert_eq!(head.content_length(), Some(130000));
    }

    #[test]
    fn test_content_length_missing_header() {
        let head = HeadFetch {
            status: 200,
            headers: HeaderMap::new(),
        };
        assert_eq!(head.content_length(), None);
    }

    #[test]
    fn test_content_length_garbage_header() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("not-a-number"));
        let head = HeadFetch {
            status: 200,
            headers,
        };
        assert_eq!(head.content_length(), None);
    }

    #[test]
    fn test_link_check_ok_boundaries() {
        let check = |status| LinkCheck {
            url: "https://example.com/".to_string(),
            status,
        };
        assert!(check(200).is_ok());
        assert!(check(301).is_ok());
        assert!(check(399).is_ok());
        assert!(!check(400).is_ok());
        assert!(!check(404).is_ok());
        assert!(!check(500).is_ok());
        assert!(!check(0).is_ok());
    }
}
