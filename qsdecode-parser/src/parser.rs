use log::trace;

use crate::actor::Actor;
use crate::decoder::CharDecoder;
use crate::enums::{Action, DecodeState, TokenState};
use crate::input::Input;
use crate::options::ParserOptions;
use crate::sink::{IdentifierSink, QuotingSink};
use crate::transitions;

/// Token-level automaton turning a query string into `field="value"` lines.
///
/// Raw bytes are classified by the transition table, decoded through the
/// owned [`CharDecoder`] with a sink chosen by the current state, and the
/// result is written to an [`Actor`]. Structural output (`=`, quotes and
/// newlines) is emitted only on state changes.
#[derive(Debug, Default)]
pub struct Parser {
    state: TokenState,
    decoder: CharDecoder,
    options: ParserOptions,
}

impl Parser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn state(&self) -> TokenState {
        self.state
    }

    pub fn decode_state(&self) -> DecodeState {
        self.decoder.state()
    }

    /// Feed a chunk of raw bytes.
    pub fn advance<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        for &byte in bytes {
            self.feed(Input::Byte(byte), actor);
        }
    }

    /// Signal the end of the byte stream, terminating any open record.
    pub fn finish<A: Actor>(&mut self, actor: &mut A) {
        self.feed(Input::EndOfInput, actor);
    }

    /// Advance the automaton by one input unit.
    pub fn feed<A: Actor>(&mut self, input: Input, actor: &mut A) {
        let class = transitions::classify(input, self.options.split_lines);
        let (next_state, action) = transitions::transit(self.state, class);

        if next_state != self.state {
            trace!("{:?} -> {next_state:?} on {input:?}", self.state);
        }

        self.perform(action, input, actor);
        self.state = next_state;
    }

    fn perform<A: Actor>(&mut self, action: Action, input: Input, actor: &mut A) {
        use Action::*;

        match action {
            BeginField => {
                if let Some(prefix) = &self.options.prefix {
                    actor.put_slice(prefix);
                }
                self.decode_field(input, actor);
            },
            DecodeField => self.decode_field(input, actor),
            EndField => {
                self.decoder.flush(&mut IdentifierSink::new(actor));
                actor.put(b'\n');
            },
            OpenValue => {
                self.decoder.flush(&mut IdentifierSink::new(actor));
                actor.put_slice(b"=\"");
            },
            DecodeValue => {
                if let Input::Byte(byte) = input {
                    self.decoder.advance(byte, &mut QuotingSink::new(actor));
                }
            },
            CloseValue => {
                self.decoder.flush(&mut QuotingSink::new(actor));
                actor.put_slice(b"\"\n");
            },
            None | Ignore => {},
        }
    }

    fn decode_field<A: Actor>(&mut self, input: Input, actor: &mut A) {
        if let Input::Byte(byte) = input {
            self.decoder.advance(byte, &mut IdentifierSink::new(actor));
        }
    }
}
