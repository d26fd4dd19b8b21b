/// HTTP request methods.
///
/// Only GET and POST are routed; the remaining verbs are parsed so that the
/// router can answer them with 400 instead of tearing the connection down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string (case-sensitive, uppercase).
    ///
    /// Returns `None` for anything that is not a known verb.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Headers are not retained: the parser scans them only for
/// `Content-Length` and throws the rest away.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// The request path (e.g., "/index.html"). Defaults to "/" when the
    /// request line carries no second token.
    pub path: String,
    /// Request body for POST requests; empty otherwise.
    pub body: Vec<u8>,
}
