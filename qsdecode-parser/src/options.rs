/// Configuration fixed for the lifetime of a [`Parser`](crate::Parser).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Written verbatim in front of every field name.
    pub prefix: Option<Vec<u8>>,
    /// Treat `\n` as a record delimiter, the same way as `&`.
    pub split_lines: bool,
}

impl ParserOptions {
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<Vec<u8>>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_split_lines(mut self, split_lines: bool) -> Self {
        self.split_lines = split_lines;
        self
    }
}
