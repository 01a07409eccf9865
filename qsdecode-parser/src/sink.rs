//! Byte sinks used by the percent decoder.
//!
//! A [`Sink`] receives every byte the [`CharDecoder`](crate::CharDecoder)
//! produces and applies the final formatting before it reaches the
//! [`Actor`]. The token parser swaps sinks depending on whether it is inside
//! a field name or a value.

use crate::actor::Actor;

/// Accepts one decoded byte at a time.
pub trait Sink {
    fn accept(&mut self, byte: u8);
}

impl<F: FnMut(u8)> Sink for F {
    #[inline]
    fn accept(&mut self, byte: u8) {
        self(byte)
    }
}

/// Forwards bytes to the actor untouched.
pub struct PassThroughSink<'a, A: ?Sized> {
    actor: &'a mut A,
}

impl<'a, A: Actor + ?Sized> PassThroughSink<'a, A> {
    pub fn new(actor: &'a mut A) -> Self {
        Self { actor }
    }
}

impl<A: Actor + ?Sized> Sink for PassThroughSink<'_, A> {
    #[inline]
    fn accept(&mut self, byte: u8) {
        self.actor.put(byte);
    }
}

/// Sink for field names.
///
/// ASCII letters and digits pass through, every other byte becomes `_`, so
/// the emitted name is usable as a shell variable.
pub struct IdentifierSink<'a, A: ?Sized> {
    actor: &'a mut A,
}

impl<'a, A: Actor + ?Sized> IdentifierSink<'a, A> {
    pub fn new(actor: &'a mut A) -> Self {
        Self { actor }
    }
}

impl<A: Actor + ?Sized> Sink for IdentifierSink<'_, A> {
    #[inline]
    fn accept(&mut self, byte: u8) {
        if byte.is_ascii_alphanumeric() {
            self.actor.put(byte);
        } else {
            self.actor.put(b'_');
        }
    }
}

/// Sink for values written between double quotes.
///
/// A `"` is prefixed with a backslash; everything else passes through.
pub struct QuotingSink<'a, A: ?Sized> {
    actor: &'a mut A,
}

impl<'a, A: Actor + ?Sized> QuotingSink<'a, A> {
    pub fn new(actor: &'a mut A) -> Self {
        Self { actor }
    }
}

impl<A: Actor + ?Sized> Sink for QuotingSink<'_, A> {
    #[inline]
    fn accept(&mut self, byte: u8) {
        if byte == b'"' {
            self.actor.put(b'\\');
        }
        self.actor.put(byte);
    }
}
