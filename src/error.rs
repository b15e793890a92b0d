use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum OnDemandError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] crate::xml::XmlError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("API error: {0}")]
    Api(ApiError),
}

pub type Result<T> = std::result::Result<T, OnDemandError>;

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// A non-success response from the API.
///
/// Carries both the HTTP status code and the application-level reason code
/// from the `<Error>` envelope. The two are separate namespaces: the reason
/// code streamlines client error handling and may be 0 when the server did
/// not supply one.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP response status code. Not the same thing as the reason code.
    pub http_status: u16,
    /// Application-level reason code from the error envelope, 0 if absent.
    pub reason_code: i32,
    /// Short message suitable for showing to an end user.
    pub simple_message: String,
    /// Longer message intended for troubleshooting.
    pub detailed_message: String,
}

impl ApiError {
    /// Build an `ApiError` from an HTTP status and an optional parsed
    /// `<Error>` element.
    ///
    /// When the envelope is missing, the message is synthesized from the
    /// status text alone. When the envelope carries no `SimpleMessage` or
    /// `DetailedMessage`, its whole text content becomes the simple message.
    pub(crate) fn from_envelope(
        status: reqwest::StatusCode,
        envelope: Option<&crate::xml::Element>,
    ) -> Self {
        match envelope {
            Some(element) => {
                let reason_code = element.child_i32("ReasonCode");
                let mut simple_message = element.child_text("SimpleMessage");
                let detailed_message = element.child_text("DetailedMessage");

                if simple_message.is_empty() && detailed_message.is_empty() {
                    simple_message = element.text();
                }

                ApiError {
                    http_status: status.as_u16(),
                    reason_code,
                    simple_message,
                    detailed_message,
                }
            }
            None => ApiError {
                http_status: status.as_u16(),
                reason_code: 0,
                simple_message: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
                detailed_message: String::new(),
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HTTP {}, reason {})",
            if self.detailed_message.is_empty() {
                &self.simple_message
            } else {
                &self.detailed_message
            },
            self.http_status,
            self.reason_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Element;

    #[test]
    fn envelope_maps_reason_code_and_messages() {
        let xml = "<Error>\
            <ReasonCode>403</ReasonCode>\
            <SimpleMessage>Already exists.</SimpleMessage>\
            <DetailedMessage>A user with this email address already exists.</DetailedMessage>\
            </Error>";
        let element = Element::parse(xml).unwrap();

        let error = ApiError::from_envelope(reqwest::StatusCode::CONFLICT, Some(&element));

        assert_eq!(409, error.http_status);
        assert_eq!(403, error.reason_code);
        assert_eq!("Already exists.", error.simple_message);
        assert_eq!(
            "A user with this email address already exists.",
            error.detailed_message
        );
    }

    #[test]
    fn envelope_without_messages_uses_the_element_text() {
        let element = Element::parse("<Error>upstream unavailable</Error>").unwrap();
        let error = ApiError::from_envelope(reqwest::StatusCode::BAD_GATEWAY, Some(&element));

        assert_eq!(0, error.reason_code);
        assert_eq!("upstream unavailable", error.simple_message);
    }

    #[test]
    fn missing_envelope_synthesizes_from_the_status() {
        let error = ApiError::from_envelope(reqwest::StatusCode::UNAUTHORIZED, None);

        assert_eq!(401, error.http_status);
        assert_eq!(0, error.reason_code);
        assert_eq!("Unauthorized", error.simple_message);
        assert_eq!("", error.detailed_message);
    }

    #[test]
    fn display_prefers_the_detailed_message() {
        let error = ApiError {
            http_status: 409,
            reason_code: 404,
            simple_message: "Conflict.".to_string(),
            detailed_message: "Duplicate email.".to_string(),
        };
        assert_eq!("Duplicate email. (HTTP 409, reason 404)", error.to_string());
    }
}
