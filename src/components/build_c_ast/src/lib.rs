mod parse;

pub use parse::{ParseError, ParseErrorKind, Parser, parse, parse_recovering};
