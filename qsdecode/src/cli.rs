use clap::{ArgGroup, Parser};
use qsdecode_parser::ParserOptions;

use crate::driver::Source;

/// Decode a URL query string into field="value" lines.
///
/// The output can be loaded into a shell with
/// `source /dev/stdin <<< "$(qsdecode -s "$QUERY_STRING")"`.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["stdin", "string"])))]
pub(crate) struct Args {
    /// Read the query string from standard input
    ///
    /// A trailing newline (as written by `echo`) becomes part of the last
    /// value; add `-l` or use `printf '%s'` to avoid it.
    #[arg(short = 'i', long)]
    pub stdin: bool,

    /// Parse the given query string
    #[arg(short = 's', long, value_name = "QUERY")]
    pub string: Option<String>,

    /// Prepend PREFIX to every field name
    #[arg(short, long, env = "QSDECODE_PREFIX")]
    pub prefix: Option<String>,

    /// Treat newlines as record separators, like '&'
    #[arg(short = 'l', long)]
    pub split_lines: bool,
}

impl Args {
    pub(crate) fn source(&self) -> Source {
        match &self.string {
            Some(query) => Source::Argument(query.clone()),
            None => Source::Stdin,
        }
    }

    pub(crate) fn parser_options(&self) -> ParserOptions {
        let options = ParserOptions::default().with_split_lines(self.split_lines);
        match &self.prefix {
            Some(prefix) => options.with_prefix(prefix.as_bytes()),
            None => options,
        }
    }
}
