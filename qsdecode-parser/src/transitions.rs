//! Transition table for the query string token parser.
//!
//! Every input unit is first reduced to a [`Class`]; each function below
//! handles one [`TokenState`] and returns the next state together with the
//! [`Action`] the [`Parser`](crate::Parser) has to perform. Keeping the
//! table free of side effects makes it easy to audit the edge-case policy
//! (stray `=`, missing value, empty records) in one place.

use crate::enums::{Action, Class, TokenState};
use crate::input::Input;

/// Reduce an input unit to the class the transition table cares about.
#[inline(always)]
pub(crate) const fn classify(input: Input, split_lines: bool) -> Class {
    match input {
        Input::EndOfInput => Class::EndOfInput,
        Input::Byte(b'=') => Class::Equals,
        Input::Byte(b'&') => Class::Delimiter,
        Input::Byte(b'\n') if split_lines => Class::Delimiter,
        Input::Byte(_) => Class::Other,
    }
}

#[inline(always)]
pub(crate) const fn transit(state: TokenState, class: Class) -> (TokenState, Action) {
    use TokenState::*;

    match state {
        AwaitingField => awaiting_field(class),
        InField => in_field(class),
        InValue => in_value(class),
        DiscardingInvalidToken => discarding(class),
    }
}

/// Between records. Empty records are skipped; a record opening with `=`
/// has no name and is dropped.
#[inline(always)]
const fn awaiting_field(class: Class) -> (TokenState, Action) {
    use Action::*;
    use TokenState::*;

    match class {
        Class::Equals => (DiscardingInvalidToken, Ignore),
        Class::Delimiter | Class::EndOfInput => (AwaitingField, None),
        Class::Other => (InField, BeginField),
    }
}

#[inline(always)]
const fn in_field(class: Class) -> (TokenState, Action) {
    use Action::*;
    use TokenState::*;

    match class {
        Class::Equals => (InValue, OpenValue),
        Class::Delimiter | Class::EndOfInput => (AwaitingField, EndField),
        Class::Other => (InField, DecodeField),
    }
}

/// Inside a value a further `=` is ordinary data.
#[inline(always)]
const fn in_value(class: Class) -> (TokenState, Action) {
    use Action::*;
    use TokenState::*;

    match class {
        Class::Delimiter | Class::EndOfInput => (AwaitingField, CloseValue),
        Class::Equals | Class::Other => (InValue, DecodeValue),
    }
}

/// Only a real delimiter resynchronizes; end of input leaves the state alone.
#[inline(always)]
const fn discarding(class: Class) -> (TokenState, Action) {
    use Action::*;
    use TokenState::*;

    match class {
        Class::Delimiter => (AwaitingField, None),
        Class::Equals | Class::EndOfInput | Class::Other => {
            (DiscardingInvalidToken, Ignore)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [TokenState; 4] = [
        TokenState::AwaitingField,
        TokenState::InField,
        TokenState::InValue,
        TokenState::DiscardingInvalidToken,
    ];

    #[test]
    fn classifies_structural_bytes() {
        assert_eq!(classify(Input::Byte(b'='), false), Class::Equals);
        assert_eq!(classify(Input::Byte(b'&'), false), Class::Delimiter);
        assert_eq!(classify(Input::EndOfInput, false), Class::EndOfInput);
        assert_eq!(classify(Input::Byte(b'%'), false), Class::Other);
        assert_eq!(classify(Input::Byte(b'+'), false), Class::Other);
    }

    #[test]
    fn newline_is_a_delimiter_only_when_splitting_lines() {
        assert_eq!(classify(Input::Byte(b'\n'), false), Class::Other);
        assert_eq!(classify(Input::Byte(b'\n'), true), Class::Delimiter);
    }

    #[test]
    fn end_of_input_matches_delimiter_except_when_discarding() {
        for state in ALL_STATES {
            let on_delimiter = transit(state, Class::Delimiter);
            let on_end = transit(state, Class::EndOfInput);
            if state == TokenState::DiscardingInvalidToken {
                assert_eq!(on_end, (state, Action::Ignore));
                assert_eq!(on_delimiter, (TokenState::AwaitingField, Action::None));
            } else {
                assert_eq!(on_delimiter, on_end, "state {state:?}");
            }
        }
    }

    #[test]
    fn every_record_terminator_returns_to_awaiting_field() {
        for state in ALL_STATES {
            let (next, _) = transit(state, Class::Delimiter);
            assert_eq!(next, TokenState::AwaitingField, "state {state:?}");
        }
    }

    #[test]
    fn leading_equals_starts_discarding() {
        assert_eq!(
            transit(TokenState::AwaitingField, Class::Equals),
            (TokenState::DiscardingInvalidToken, Action::Ignore)
        );
    }

    #[test]
    fn equals_inside_value_is_data() {
        assert_eq!(
            transit(TokenState::InValue, Class::Equals),
            (TokenState::InValue, Action::DecodeValue)
        );
    }
}
