//! Percent-decoding automaton.
//!
//! [`CharDecoder`] consumes raw bytes one at a time and reports decoded bytes
//! to a [`Sink`]. `+` becomes a space and `%XX` becomes the byte with hex
//! value `XX`. Malformed escapes are never an error. A `%` followed by a
//! non-hex byte is replayed as `%` and that byte; a valid first digit
//! followed by a non-hex byte yields the digit and that byte, without the
//! `%`. Either way the sink sees at most two bytes per input byte.

use crate::enums::DecodeState;
use crate::hex::decode_hex_digit;
use crate::sink::{PassThroughSink, Sink};

#[derive(Default, Debug, Clone)]
pub struct CharDecoder {
    state: DecodeState,
    /// High nibble once the first digit is seen, the full byte after the
    /// second. Meaningless while `Idle`.
    partial: u8,
    /// First hex digit as received, emitted if the second digit is invalid.
    first_digit: u8,
}

impl CharDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DecodeState::Idle
    }

    /// Consume one raw byte, invoking `sink` for every byte it completes.
    pub fn advance<S: Sink + ?Sized>(&mut self, byte: u8, sink: &mut S) {
        use DecodeState::*;

        match self.state {
            Idle => match byte {
                b'%' => {
                    self.partial = 0;
                    self.state = AwaitingFirstHexDigit;
                },
                b'+' => sink.accept(b' '),
                _ => sink.accept(byte),
            },
            AwaitingFirstHexDigit => match decode_hex_digit(byte) {
                Some(digit) => {
                    self.partial = digit << 4;
                    self.first_digit = byte;
                    self.state = AwaitingSecondHexDigit;
                },
                None => {
                    self.state = Idle;
                    sink.accept(b'%');
                    sink.accept(byte);
                },
            },
            AwaitingSecondHexDigit => match decode_hex_digit(byte) {
                Some(digit) => {
                    self.partial |= digit;
                    self.state = Idle;
                    sink.accept(self.partial);
                },
                None => {
                    self.state = Idle;
                    sink.accept(self.first_digit);
                    sink.accept(byte);
                },
            },
        }
    }

    /// Replay an unfinished escape verbatim and return to `Idle`.
    ///
    /// Called when the token holding the escape ends, so a dangling `%` or
    /// `%4` shows up in the output instead of swallowing the next byte.
    pub fn flush<S: Sink + ?Sized>(&mut self, sink: &mut S) {
        match self.state {
            DecodeState::Idle => {},
            DecodeState::AwaitingFirstHexDigit => sink.accept(b'%'),
            DecodeState::AwaitingSecondHexDigit => {
                sink.accept(b'%');
                sink.accept(self.first_digit);
            },
        }
        self.state = DecodeState::Idle;
    }
}

/// Percent-decode `bytes` without any field/value handling.
pub fn percent_decode(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut decoder = CharDecoder::new();
    {
        let mut sink = PassThroughSink::new(&mut out);
        for &byte in bytes {
            decoder.advance(byte, &mut sink);
        }
        decoder.flush(&mut sink);
    }
    out
}
