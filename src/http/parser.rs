use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    EmptyRequest,
    InvalidRequest,
    InvalidMethod,
    InvalidContentLength,
    Incomplete,
}

/// Parses one HTTP request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed, or
/// `ParseError::Incomplete` when more data is needed. Only the request line
/// and a `Content-Length` header (exact, case-sensitive prefix) are honored;
/// every other header line is skipped.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: "METHOD PATH PROTOCOL", split on spaces. A missing
    // second token defaults the path to "/"; the protocol token is ignored.
    let request_line = lines.next().ok_or(ParseError::EmptyRequest)?;
    if request_line.is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let mut parts = request_line.split_whitespace();
    let method_str = parts.next().ok_or(ParseError::EmptyRequest)?;
    let path = parts.next().unwrap_or("/");

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers: scan only for Content-Length, discard the rest.
    let mut content_length = 0usize;
    for line in lines {
        if let Some(value) = line.strip_prefix("Content-Length:") {
            content_length = value
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidContentLength)?;
        }
    }

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path: path.to_string(),
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
