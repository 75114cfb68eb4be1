use std::fmt::Display;

/// Punctuators that matter for declarations. Operators only ever appear
/// inside array sizes, bit-field widths and skipped declarations, where
/// they are kept as text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Punctuator {
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Colon,
    Semicolon,
    Multiply,
    Assign,
    Ellipses,
    Dot,
    Ampersand,
    Add,
    Subtract,
    BitComplement,
    Not,
    Divide,
    Modulus,
    LessThan,
    GreaterThan,
    BitXor,
    BitOr,
    Ternary,
}

impl Punctuator {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '[' => Self::OpenBracket,
            ']' => Self::CloseBracket,
            '(' => Self::OpenParen,
            ')' => Self::CloseParen,
            '{' => Self::OpenCurly,
            '}' => Self::CloseCurly,
            ',' => Self::Comma,
            ':' => Self::Colon,
            ';' => Self::Semicolon,
            '*' => Self::Multiply,
            '=' => Self::Assign,
            '.' => Self::Dot,
            '&' => Self::Ampersand,
            '+' => Self::Add,
            '-' => Self::Subtract,
            '~' => Self::BitComplement,
            '!' => Self::Not,
            '/' => Self::Divide,
            '%' => Self::Modulus,
            '<' => Self::LessThan,
            '>' => Self::GreaterThan,
            '^' => Self::BitXor,
            '|' => Self::BitOr,
            '?' => Self::Ternary,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenCurly => "{",
            Self::CloseCurly => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Multiply => "*",
            Self::Assign => "=",
            Self::Ellipses => "...",
            Self::Dot => ".",
            Self::Ampersand => "&",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::BitComplement => "~",
            Self::Not => "!",
            Self::Divide => "/",
            Self::Modulus => "%",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::Ternary => "?",
        }
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
