use serde::{Deserialize, Serialize};

use crate::validate::validate_url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("Link title is required")]
    MissingTitle,

    #[error("Invalid link URL: {0}")]
    InvalidUrl(String),
}

/// Fields of the "new link" dialog, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub url:   String,
}

/// Payload sent to the backend to attach a link to a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub trip_id: String,
    pub title:   String,
    pub url:     String,
}

impl LinkDraft {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url:   url.into(),
        }
    }

    /// Validates the draft and builds the request for `trip_id`.
    ///
    /// # Errors
    /// `LinkError::MissingTitle` for a blank title, `LinkError::InvalidUrl`
    /// when the trimmed URL is not an absolute http(s) URL.
    pub fn into_request(self, trip_id: impl Into<String>) -> Result<CreateLinkRequest, LinkError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LinkError::MissingTitle);
        }
        let url = self.url.trim();
        if !validate_url(url) {
            return Err(LinkError::InvalidUrl(url.to_owned()));
        }
        Ok(CreateLinkRequest {
            trip_id: trip_id.into(),
            title:   title.to_owned(),
            url:     url.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_request_trims_fields() {
        let request = LinkDraft::new("  Airbnb ", " https://airbnb.com/rooms/1 ")
            .into_request("trip-1")
            .unwrap();
        assert_eq!(
            request,
            CreateLinkRequest {
                trip_id: "trip-1".to_owned(),
                title:   "Airbnb".to_owned(),
                url:     "https://airbnb.com/rooms/1".to_owned(),
            }
        );
    }

    #[test]
    fn test_into_request_errors() {
        assert_eq!(
            LinkDraft::new("   ", "https://example.com").into_request("t"),
            Err(LinkError::MissingTitle)
        );
        assert_eq!(
            LinkDraft::new("Hotel", "example.com").into_request("t"),
            Err(LinkError::InvalidUrl("example.com".to_owned()))
        );
        assert_eq!(LinkDraft::default().into_request("t"), Err(LinkError::MissingTitle));
    }

    #[test]
    fn test_request_json_shape() {
        let request = LinkDraft::new("Hotel", "https://hotel.example.com")
            .into_request("abc")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "tripId": "abc",
                "title": "Hotel",
                "url": "https://hotel.example.com",
            })
        );
    }
}
