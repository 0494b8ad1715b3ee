use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::{ParseError, find_headers_end, parse_with_headers_end};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

/// Per-connection limits, taken from [`crate::config::Config`].
#[derive(Debug, Clone, Copy)]
pub struct ConnectionLimits {
    pub read_buffer_size: usize,
    pub max_request_size: usize,
}

pub struct Connection<S> {
    id: u64,
    stream: S,
    router: Router,
    limits: ConnectionLimits,
    buffer: BytesMut,
    /// Buffer prefix already searched for the header terminator.
    scanned: usize,
    headers_end: Option<usize>,
    requests: u64,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(id: u64, stream: S, router: Router, limits: ConnectionLimits) -> Self {
        Self {
            id,
            stream,
            router,
            limits,
            buffer: BytesMut::with_capacity(limits.read_buffer_size),
            scanned: 0,
            headers_end: None,
            requests: 0,
            state: ConnectionState::Reading,
        }
    }

    /// Serves requests until the client asks to close, hangs up, or sends
    /// something unparseable.
    ///
    /// Requests are handled one at a time, so responses leave in the order
    /// their requests arrived.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await {
                    Some(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    None => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    self.requests += 1;
                    let keep_alive = req.keep_alive();

                    tracing::info!(
                        conn = self.id,
                        request = self.requests,
                        method = req.method.as_str(),
                        path = %req.path,
                        keep_alive,
                        "Handling request"
                    );

                    let response = self.router.dispatch(req).await?;

                    tracing::info!(
                        conn = self.id,
                        request = self.requests,
                        status = response.status.as_u16(),
                        "Sending response"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading;
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    tracing::debug!(conn = self.id, requests = self.requests, "Closing connection");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Returns the next complete request, or `None` once the connection
    /// should be closed.
    pub async fn read_request(&mut self) -> Option<Request> {
        loop {
            match self.try_parse() {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    self.scanned = 0;
                    self.headers_end = None;
                    return Some(request);
                }

                Err(ParseError::Incomplete) => {
                    if self.buffer.len() >= self.limits.max_request_size {
                        tracing::warn!(
                            conn = self.id,
                            error = ?ParseError::TooLarge,
                            buffered = self.buffer.len(),
                            "Dropping connection"
                        );
                        return None;
                    }
                }

                Err(e) => {
                    tracing::warn!(conn = self.id, error = ?e, "Malformed request");
                    return None;
                }
            }

            match read_chunk(&mut self.stream, self.limits.read_buffer_size).await {
                Ok(chunk) if chunk.is_empty() => {
                    // Client closed connection
                    return None;
                }
                Ok(chunk) => self.buffer.extend_from_slice(&chunk),
                Err(e) => {
                    tracing::warn!(conn = self.id, error = %e, "Read failed");
                    return None;
                }
            }
        }
    }

    /// Parses the buffered request, searching for the header terminator only
    /// in bytes that arrived since the last attempt.
    fn try_parse(&mut self) -> Result<(Request, usize), ParseError> {
        if self.headers_end.is_none() {
            let from = self.scanned.saturating_sub(3);
            self.headers_end = find_headers_end(&self.buffer, from);
            self.scanned = self.buffer.len();
        }

        match self.headers_end {
            Some(end) => parse_with_headers_end(&self.buffer, end),
            None => Err(ParseError::Incomplete),
        }
    }
}

/// One read from the socket into a fresh buffer of `size` bytes.
///
/// The returned vector is truncated to what was actually read; an empty
/// vector means end of stream.
pub async fn read_chunk<R>(reader: &mut R, size: usize) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut chunk = vec![0u8; size];
    let n = reader.read(&mut chunk).await?;
    chunk.truncate(n);
    Ok(chunk)
}
