mod composite;
mod declarator;
mod error;
mod input;
mod opaque;
mod specifiers;
mod top_level;

#[cfg(test)]
mod tests;

use c_ast::File;
use c_token::CToken;
use diagnostics::Diagnostics;
pub use error::{ParseError, ParseErrorKind};
pub use input::Input;

pub struct Parser<'a> {
    input: Input,
    /// When present, records that fail to parse are reported here and skipped
    diagnostics: Option<&'a Diagnostics<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(input: Input) -> Self {
        Self {
            input,
            diagnostics: None,
        }
    }

    pub fn recovering(input: Input, diagnostics: &'a Diagnostics<'a>) -> Self {
        Self {
            input,
            diagnostics: Some(diagnostics),
        }
    }

    pub fn parse(mut self) -> Result<File, ParseError> {
        let mut file = File::default();

        while !self.input.peek().is_end_of_file() {
            self.parse_external_declaration(&mut file.records)?;
        }

        Ok(file)
    }

    /// Reports `error` and carries on, or hands it back when not recovering
    fn recover(&self, error: ParseError) -> Result<(), ParseError> {
        match self.diagnostics {
            Some(diagnostics) => {
                diagnostics.push(error);
                Ok(())
            }
            None => Err(error),
        }
    }
}

/// Collects the struct and union definitions of a lexed file, stopping at the first error
pub fn parse(tokens: Vec<CToken>) -> Result<File, ParseError> {
    Parser::new(Input::new(tokens)).parse()
}

/// Collects the struct and union definitions of a lexed file.
/// Records that fail to parse are reported to `diagnostics` and left out.
pub fn parse_recovering<'a>(tokens: Vec<CToken>, diagnostics: &'a Diagnostics<'a>) -> File {
    match Parser::recovering(Input::new(tokens), diagnostics).parse() {
        Ok(file) => file,
        Err(error) => {
            diagnostics.push(error);
            File::default()
        }
    }
}
