use bytes::BytesMut;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Capacity of the lookahead window: current octet, next, next-next.
pub const LOOKAHEAD: usize = 3;

const CHUNK_CAPACITY: usize = 512;

/// A 3-octet lookahead window over an asynchronous byte stream.
///
/// The cursor owns the read side of a connection for the connection's whole
/// lifetime, so its position correctly spans request boundaries: after one
/// request is consumed, the next `peek` observes the first octet of the
/// next request (or `None` at end of stream).
///
/// Window slots are populated lazily. A refill from the transport happens
/// only when a `peek` or `advance` demands an octet the chunk buffer does
/// not hold, so finishing one request never awaits bytes belonging to the
/// next one; the keep-alive idle wait happens at the first `peek` of the
/// next parse call. At end of stream slots become `None` — an explicit
/// non-matching sentinel, not an error.
pub struct Cursor<R> {
    reader: R,
    chunk: BytesMut,
    pos: usize,
    eof: bool,
    window: [Option<u8>; LOOKAHEAD],
    filled: usize,
    offset: u64,
}

impl<R: AsyncRead + Unpin> Cursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: BytesMut::with_capacity(CHUNK_CAPACITY),
            pos: 0,
            eof: false,
            window: [None; LOOKAHEAD],
            filled: 0,
            offset: 0,
        }
    }

    /// Absolute stream offset of the next unconsumed octet.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The next unconsumed octet, without consuming it.
    pub async fn first(&mut self) -> io::Result<Option<u8>> {
        self.peek(0).await
    }

    /// One octet of lookahead past `first`.
    pub async fn second(&mut self) -> io::Result<Option<u8>> {
        self.peek(1).await
    }

    /// Returns the `i`-th unconsumed octet (`i < LOOKAHEAD`), filling
    /// window slots from the stream as needed.
    pub async fn peek(&mut self, i: usize) -> io::Result<Option<u8>> {
        assert!(i < LOOKAHEAD);
        while self.filled <= i {
            let octet = self.fetch().await?;
            self.window[self.filled] = octet;
            self.filled += 1;
        }
        Ok(self.window[i])
    }

    /// Consumes one octet, shifting the window forward.
    pub async fn advance(&mut self) -> io::Result<()> {
        if self.filled == 0 {
            // Nothing buffered in the window; consume straight off the chunk.
            self.fetch().await?;
        } else {
            for i in 1..LOOKAHEAD {
                self.window[i - 1] = self.window[i];
            }
            self.window[LOOKAHEAD - 1] = None;
            self.filled -= 1;
        }
        self.offset += 1;
        Ok(())
    }

    /// Pulls the next raw octet off the chunk buffer, refilling from the
    /// transport when the chunk is exhausted. `None` once the stream ends.
    async fn fetch(&mut self) -> io::Result<Option<u8>> {
        if self.pos >= self.chunk.len() && !self.eof {
            self.chunk.clear();
            self.pos = 0;
            let n = self.reader.read_buf(&mut self.chunk).await?;
            if n == 0 {
                self.eof = true;
            }
        }

        if self.pos < self.chunk.len() {
            let octet = self.chunk[self.pos];
            self.pos += 1;
            Ok(Some(octet))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn window_spans_input_and_ends_with_none() {
        let mut cursor = Cursor::new(&b"ab"[..]);

        assert_eq!(cursor.peek(0).await.unwrap(), Some(b'a'));
        assert_eq!(cursor.peek(1).await.unwrap(), Some(b'b'));
        assert_eq!(cursor.peek(2).await.unwrap(), None);

        cursor.advance().await.unwrap();
        assert_eq!(cursor.first().await.unwrap(), Some(b'b'));
        assert_eq!(cursor.offset(), 1);

        cursor.advance().await.unwrap();
        assert_eq!(cursor.first().await.unwrap(), None);
    }
}
