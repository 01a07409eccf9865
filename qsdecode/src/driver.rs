//! Feeds the selected input source through the parser and streams the
//! formatted output to a writer.

use std::io::{self, Read, Write};

use log::debug;
use qsdecode_parser::{Actor, Parser, ParserOptions};

use crate::error::{DriverError, Result};

/// Size of the buffer used to drain standard input.
pub(crate) const READ_BUFFER_CAPACITY: usize = 4096;

/// Where the query string comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Stdin,
    Argument(String),
}

/// [`Actor`] writing every byte straight to `W`.
///
/// The parser cannot fail, so the first write error is latched here and
/// surfaced by [`WriteActor::check`] once the current chunk is done.
struct WriteActor<W: Write> {
    writer: W,
    error: Option<io::Error>,
    written: usize,
}

impl<W: Write> WriteActor<W> {
    fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
            written: 0,
        }
    }

    fn check(&mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(DriverError::Write(err)),
            None => Ok(()),
        }
    }

    fn into_inner(mut self) -> Result<W> {
        self.check()?;
        self.writer.flush().map_err(DriverError::Write)?;
        Ok(self.writer)
    }
}

impl<W: Write> Actor for WriteActor<W> {
    fn put(&mut self, byte: u8) {
        self.put_slice(&[byte]);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }

        match self.writer.write_all(bytes) {
            Ok(()) => self.written += bytes.len(),
            Err(err) => self.error = Some(err),
        }
    }
}

/// One decoding run: a parser, its output and some bookkeeping for logs.
struct Driver<W: Write> {
    parser: Parser,
    actor: WriteActor<W>,
    consumed: usize,
}

impl<W: Write> Driver<W> {
    fn new(options: ParserOptions, writer: W) -> Self {
        Self {
            parser: Parser::new(options),
            actor: WriteActor::new(writer),
            consumed: 0,
        }
    }

    fn decode_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.parser.advance(bytes, &mut self.actor);
        self.consumed += bytes.len();
        self.actor.check()
    }

    fn decode_reader<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = [0u8; READ_BUFFER_CAPACITY];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => return Ok(()),
                Ok(n) => self.decode_slice(&buf[..n])?,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(DriverError::Read(err)),
            }
        }
    }

    fn finish(mut self) -> Result<W> {
        self.parser.finish(&mut self.actor);
        debug!(
            "decoded {} input bytes into {} output bytes",
            self.consumed, self.actor.written
        );
        self.actor.into_inner()
    }
}

/// Decode `source` with `options`, writing the result to `output`.
///
/// `stdin` is only read when `source` is [`Source::Stdin`].
pub(crate) fn run<R: Read, W: Write>(
    source: &Source,
    stdin: R,
    options: ParserOptions,
    output: W,
) -> Result<W> {
    let mut driver = Driver::new(options, output);

    match source {
        Source::Stdin => {
            debug!("reading query string from stdin");
            driver.decode_reader(stdin)?;
        },
        Source::Argument(query) => {
            debug!("parsing query string argument ({} bytes)", query.len());
            driver.decode_slice(query.as_bytes())?;
        },
    }

    driver.finish()
}
