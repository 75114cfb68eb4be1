use std::{cmp::Ordering, fmt::Display};

/// One-based line and column within a source file
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    pub fn shift_column(&self, amount: u32) -> Self {
        Self {
            line: self.line,
            column: self.column + amount,
        }
    }

    /// Location of the character following `c`
    pub fn advance(&self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            self.shift_column(1)
        }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_over_newline_resets_column() {
        let location = Location::new(3, 7);
        assert_eq!(location.advance('x'), Location::new(3, 8));
        assert_eq!(location.advance('\n'), Location::new(4, 1));
    }

    #[test]
    fn orders_by_line_then_column() {
        assert!(Location::new(1, 9) < Location::new(2, 1));
        assert!(Location::new(2, 1) < Location::new(2, 3));
    }
}
