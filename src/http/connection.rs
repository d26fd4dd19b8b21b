use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{error, warn};

use crate::assets::StaticFiles;
use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router;
use crate::store::RecordStore;

/// One accepted socket, handled for exactly one request/response cycle.
///
/// There is no keep-alive: after the response is written (or the request
/// turns out to be malformed) the connection is dropped and the socket
/// closes with it.
pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    store: Arc<RecordStore>,
    assets: Arc<StaticFiles>,
}

enum Inbound {
    Request(Request),
    /// Client closed before sending anything.
    Closed,
    Malformed(ParseError),
}

impl Connection {
    pub fn new(stream: TcpStream, store: Arc<RecordStore>, assets: Arc<StaticFiles>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            store,
            assets,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let request = match self.read_request().await? {
            Inbound::Request(request) => request,
            Inbound::Closed => return Ok(()),
            Inbound::Malformed(e) => {
                warn!("Malformed request: {:?}", e);
                let response = match e {
                    ParseError::InvalidMethod => Response::bad_request("Unsupported method"),
                    _ => Response::bad_request("Malformed request"),
                };
                return self.write_response(&response).await;
            }
        };

        let response = match router::route(&request, &self.store, &self.assets).await {
            Ok(response) => response,
            Err(e) => {
                error!("Handler error: {e:#}");
                Response::internal_error()
            }
        };

        self.write_response(&response).await
    }

    async fn read_request(&mut self) -> anyhow::Result<Inbound> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, _consumed)) => {
                    return Ok(Inbound::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Ok(Inbound::Malformed(e));
                }
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed connection
                    return Ok(Inbound::Closed);
                }
                // EOF mid-request: declared body never arrived
                return Ok(Inbound::Malformed(ParseError::Incomplete));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    async fn write_response(&mut self, response: &Response) -> anyhow::Result<()> {
        ResponseWriter::new(response)
            .write_to_stream(&mut self.stream)
            .await
    }
}
