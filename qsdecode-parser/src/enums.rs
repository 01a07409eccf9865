/// Progress of the percent-decoding automaton.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    #[default]
    Idle,
    AwaitingFirstHexDigit,
    AwaitingSecondHexDigit,
}

/// Position of the token parser inside a `field=value` record.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    #[default]
    AwaitingField,
    InField,
    InValue,
    DiscardingInvalidToken,
}

/// Coarse classification of an input unit, as seen by the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Class {
    Equals,
    Delimiter,
    EndOfInput,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    BeginField,
    DecodeField,
    EndField,
    OpenValue,
    DecodeValue,
    CloseValue,
    Ignore,
}
