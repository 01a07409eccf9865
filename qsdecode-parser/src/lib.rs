//! Streaming decoder for URL query strings.
//!
//! Input such as `field1=value1&field2=value2` is turned into
//! line-oriented `field1="value1"` output that a shell can `source`.
//! Decoding is done by two cooperating automata that consume one byte at a
//! time and never buffer more than a couple of bytes:
//! - [`CharDecoder`] undoes percent-encoding (`%XX`) and `+`,
//! - [`Parser`] splits the stream into field names and values, routes every
//!   byte through the decoder and writes the formatted result to an
//!   [`Actor`].
//!
//! ```
//! use qsdecode_parser::{Parser, ParserOptions};
//!
//! let mut parser = Parser::new(ParserOptions::default());
//! let mut out = Vec::new();
//! parser.advance(b"field1=value1&field2=value2", &mut out);
//! parser.finish(&mut out);
//!
//! assert_eq!(out, b"field1=\"value1\"\nfield2=\"value2\"\n");
//! ```
mod actor;
mod decoder;
mod enums;
mod hex;
mod input;
mod options;
mod parser;
mod sink;
mod transitions;

pub use actor::Actor;
pub use decoder::{CharDecoder, percent_decode};
pub use enums::{DecodeState, TokenState};
pub use input::Input;
pub use options::ParserOptions;
pub use parser::Parser;
pub use sink::{IdentifierSink, PassThroughSink, QuotingSink, Sink};
