use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

/// Serves a byte string in fixed-size chunks, one chunk per read call,
/// simulating arbitrary TCP segment boundaries.
pub struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk_size: usize,
}

impl ChunkedReader {
    pub fn new(data: impl Into<Vec<u8>>, chunk_size: usize) -> Self {
        assert!(chunk_size > 0);
        Self {
            data: data.into(),
            pos: 0,
            chunk_size,
        }
    }
}

impl AsyncRead for ChunkedReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        if self.pos < self.data.len() {
            let end = (self.pos + self.chunk_size).min(self.data.len());
            let n = (end - self.pos).min(buf.remaining());
            let pos = self.pos;
            buf.put_slice(&self.data[pos..pos + n]);
            self.pos += n;
        }
        Poll::Ready(Ok(()))
    }
}
