//! Output side of the query string parser.
//!
//! The [`Parser`](crate::parser::Parser) never touches standard output on its
//! own. Every byte it produces, structural punctuation as well as decoded
//! field and value bytes, is handed to an [`Actor`]. The embedding
//! application decides where those bytes end up: a locked stdout, a socket,
//! or an in-memory buffer in tests.

/// Consumer of the formatted output stream.
pub trait Actor {
    /// Receives a single output byte.
    fn put(&mut self, byte: u8);

    /// Receives a run of output bytes.
    fn put_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put(byte);
        }
    }
}

impl Actor for Vec<u8> {
    fn put(&mut self, byte: u8) {
        self.push(byte);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<A: Actor + ?Sized> Actor for &mut A {
    fn put(&mut self, byte: u8) {
        (**self).put(byte);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        (**self).put_slice(bytes);
    }
}
