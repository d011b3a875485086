use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::http::encoding;
use crate::http::parser::RequestParser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

/// One accepted connection.
///
/// The read half lives inside the parser's cursor for the whole
/// connection, so lookahead state carries across keep-alive requests.
pub struct Connection {
    parser: RequestParser<OwnedReadHalf>,
    write_half: OwnedWriteHalf,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            parser: RequestParser::new(read_half),
            write_half,
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection state machine until the peer disconnects, a
    /// request asks to close, or a parse/transport error occurs. Errors
    /// propagate before any response bytes are written for the failed
    /// request; the socket is dropped on every exit path.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.parser.parse_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            // Peer closed between requests
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let mut response = self
                        .router
                        .route(req)
                        .unwrap_or_else(Response::not_found);

                    encoding::negotiate(req, &mut response)?;

                    let keep_alive = req.keep_alive();
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.write_half).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
