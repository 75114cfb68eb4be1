mod lexer;

use c_token::CToken;
pub use c_token::Invalid as LexError;
pub use lexer::Lexer;
use source_files::SourceFileKey;
use text::TextPeeker;

// Common lexing routine:
// Record declarations are parsed with a fair amount of look-ahead and skipping,
// so we convert each file into tokens all at once. The result always ends with
// an end-of-file token.
pub fn lex_c_code(content: &str, key: SourceFileKey) -> Vec<CToken> {
    let mut lexer = Lexer::new(TextPeeker::new(content.chars(), key));
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.is_end_of_file();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
