/// One unit fed into the [`Parser`](crate::Parser).
///
/// The end of the byte stream is an explicit variant rather than an
/// out-of-band value squeezed into the byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Byte(u8),
    EndOfInput,
}

impl From<u8> for Input {
    #[inline]
    fn from(byte: u8) -> Self {
        Input::Byte(byte)
    }
}
