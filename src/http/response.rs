/// HTTP status codes emitted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete HTTP response ready to be sent to a client.
///
/// The header set is fixed: `Content-Type` (when present), the wildcard CORS
/// header, and a computed `Content-Length`. There is no general header map
/// because no handler needs one.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Omitted from the wire entirely when `None` (the favicon 204).
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl Response {
    /// A response with an explicit status, content type and body.
    pub fn new(
        status: StatusCode,
        content_type: &'static str,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            status,
            content_type: Some(content_type),
            body: body.into(),
        }
    }

    /// 200 OK with a plain-text body.
    pub fn ok_text(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::Ok, "text/plain", body)
    }

    /// 200 OK with an `application/json` body.
    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::Ok, "application/json", body)
    }

    /// 204 with no body and no content type.
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NoContent,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// 400 with a plain-text body.
    pub fn bad_request(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::BadRequest, "text/plain", body)
    }

    /// 404 with a plain-text body.
    pub fn not_found(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::NotFound, "text/plain", body)
    }

    /// 500 with a generic plain-text body.
    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::InternalServerError,
            "text/plain",
            "500 Internal Server Error",
        )
    }
}
