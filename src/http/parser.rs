use crate::http::cursor::Cursor;
use crate::http::fields::FieldMap;
use crate::http::request::{Request, RequestLine};
use std::fmt;
use std::io;
use tokio::io::AsyncRead;

const CR: u8 = 13;
const LF: u8 = 10;
const SP: u8 = 32;
const HT: u8 = 9;

/// A grammar violation while scanning a request.
///
/// Any variant terminates the connection; malformed input is never retried
/// and no response bytes are written for the failed request.
#[derive(Debug)]
pub enum ParseError {
    /// A required literal octet (SP, CR, LF, ':') was not found.
    UnexpectedOctet {
        expected: u8,
        found: Option<u8>,
        offset: u64,
    },
    /// A token was required but the next octet cannot start one.
    InvalidToken { found: Option<u8>, offset: u64 },
    /// The stream ended in the middle of a request.
    UnexpectedEof { offset: u64 },
    /// Scanned octets do not form valid text.
    InvalidText { offset: u64 },
    /// The transport failed mid-read.
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedOctet {
                expected,
                found,
                offset,
            } => write!(
                f,
                "unexpected octet {:?} at offset {}, expected {}",
                found, offset, expected
            ),
            ParseError::InvalidToken { found, offset } => {
                write!(f, "expected token at offset {} but found {:?}", offset, found)
            }
            ParseError::UnexpectedEof { offset } => {
                write!(f, "unexpected end of stream at offset {}", offset)
            }
            ParseError::InvalidText { offset } => {
                write!(f, "invalid text ending at offset {}", offset)
            }
            ParseError::Io(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Incremental HTTP/1.1 request scanner.
///
/// The parser owns the connection's [`Cursor`] and is called repeatedly on
/// it: each successful [`parse_request`](Self::parse_request) leaves the
/// cursor positioned on the octet after the request's last body byte, so
/// the next call scans the next request with no buffer reset and no byte
/// loss at the boundary.
pub struct RequestParser<R> {
    cursor: Cursor<R>,
}

impl<R: AsyncRead + Unpin> RequestParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(reader),
        }
    }

    /// Parses one request off the stream.
    ///
    /// Returns `Ok(None)` when the stream has ended cleanly at a request
    /// boundary (the peer closed between requests). Any grammar violation,
    /// including the stream ending mid-request, is a [`ParseError`].
    pub async fn parse_request(&mut self) -> Result<Option<Request>, ParseError> {
        if self.cursor.first().await?.is_none() {
            return Ok(None);
        }

        let request_line = self.request_line().await?;
        let field_lines = self.field_lines().await?;
        let content_length = field_lines
            .get("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let body = self.body(content_length).await?;

        Ok(Some(Request {
            request_line,
            field_lines,
            body,
        }))
    }

    async fn request_line(&mut self) -> Result<RequestLine, ParseError> {
        let mut method = Vec::new();
        while let Some(o) = self.cursor.first().await? {
            if o == SP {
                break;
            }
            method.push(o);
            self.cursor.advance().await?;
        }
        if method.is_empty() {
            return Err(ParseError::InvalidToken {
                found: self.cursor.first().await?,
                offset: self.cursor.offset(),
            });
        }

        self.expect(SP).await?;

        let mut target = Vec::new();
        while let Some(o) = self.cursor.first().await? {
            if o == SP {
                break;
            }
            target.push(o);
            self.cursor.advance().await?;
        }
        if target.is_empty() {
            return Err(ParseError::InvalidToken {
                found: self.cursor.first().await?,
                offset: self.cursor.offset(),
            });
        }

        self.expect(SP).await?;

        let mut version = Vec::new();
        loop {
            let Some(o) = self.cursor.first().await? else {
                break;
            };
            if o == CR && self.cursor.second().await? == Some(LF) {
                break;
            }
            version.push(o);
            self.cursor.advance().await?;
        }

        self.expect(CR).await?;
        self.expect(LF).await?;

        Ok(RequestLine {
            method: self.into_text(method)?,
            target: self.into_text(target)?,
            version: self.into_text(version)?,
        })
    }

    async fn field_lines(&mut self) -> Result<FieldMap, ParseError> {
        let mut field_lines = FieldMap::new();

        loop {
            let Some(o) = self.cursor.first().await? else {
                break;
            };
            if o == CR && self.cursor.second().await? == Some(LF) {
                break;
            }

            let name = self.expect_token().await?;
            self.expect(b':').await?;

            let mut value = Vec::new();
            loop {
                let Some(o) = self.cursor.first().await? else {
                    break;
                };
                if o == CR && self.cursor.second().await? == Some(LF) {
                    break;
                }
                value.push(o);
                self.cursor.advance().await?;
            }
            self.expect(CR).await?;
            self.expect(LF).await?;

            let name = self.into_text(name)?;
            let value = self.into_text(value)?;
            field_lines.insert(name, value.trim().to_string());
        }

        self.expect(CR).await?;
        self.expect(LF).await?;

        Ok(field_lines)
    }

    async fn body(&mut self, content_length: usize) -> Result<Vec<u8>, ParseError> {
        let mut body = Vec::with_capacity(content_length.min(8 * 1024));
        for _ in 0..content_length {
            match self.cursor.first().await? {
                Some(o) => {
                    body.push(o);
                    self.cursor.advance().await?;
                }
                None => {
                    return Err(ParseError::UnexpectedEof {
                        offset: self.cursor.offset(),
                    });
                }
            }
        }
        Ok(body)
    }

    async fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        let found = self.cursor.first().await?;
        if found == Some(expected) {
            self.cursor.advance().await?;
            Ok(())
        } else {
            Err(ParseError::UnexpectedOctet {
                expected,
                found,
                offset: self.cursor.offset(),
            })
        }
    }

    async fn expect_token(&mut self) -> Result<Vec<u8>, ParseError> {
        match self.cursor.first().await? {
            Some(o) if is_token(o) => self.token().await,
            found => Err(ParseError::InvalidToken {
                found,
                offset: self.cursor.offset(),
            }),
        }
    }

    async fn token(&mut self) -> Result<Vec<u8>, ParseError> {
        let mut token = Vec::new();
        while let Some(o) = self.cursor.first().await? {
            if !is_token(o) {
                break;
            }
            token.push(o);
            self.cursor.advance().await?;
        }
        Ok(token)
    }

    fn into_text(&self, octets: Vec<u8>) -> Result<String, ParseError> {
        String::from_utf8(octets).map_err(|_| ParseError::InvalidText {
            offset: self.cursor.offset(),
        })
    }
}

/// Whether `o` can appear in a token.
fn is_token(o: u8) -> bool {
    !is_ctl(o) && !is_separator(o)
}

/// Whether `o` is a control character (0-31) or DEL (127).
fn is_ctl(o: u8) -> bool {
    o <= 31 || o == 127
}

fn is_separator(o: u8) -> bool {
    matches!(
        o,
        b'(' | b')'
            | b'<'
            | b'>'
            | b'@'
            | b','
            | b';'
            | b':'
            | b'\\'
            | b'"'
            | b'/'
            | b'['
            | b']'
            | b'?'
            | b'='
            | b'{'
            | b'}'
            | SP
            | HT
    )
}
