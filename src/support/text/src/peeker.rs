use crate::{Character, Text};
use source_files::{Location, Source, SourceFileKey};
use std::{collections::VecDeque, iter::Fuse};

/// Character stream with unbounded look-ahead that tracks where each
/// character was written
pub struct TextPeeker<I>
where
    I: Iterator<Item = char>,
{
    chars: Fuse<I>,
    key: SourceFileKey,
    next_location: Location,
    queue: VecDeque<(char, Source)>,
}

impl<I> TextPeeker<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(chars: I, key: SourceFileKey) -> Self {
        Self {
            chars: chars.fuse(),
            key,
            next_location: Location::start(),
            queue: VecDeque::new(),
        }
    }

    fn pull(&mut self) -> Option<(char, Source)> {
        let c = self.chars.next()?;
        let source = Source::new(self.key, self.next_location);
        self.next_location = self.next_location.advance(c);
        Some((c, source))
    }

    fn end(&self) -> Character {
        Character::End(Source::new(self.key, self.next_location))
    }
}

impl<I> Text for TextPeeker<I>
where
    I: Iterator<Item = char>,
{
    fn next(&mut self) -> Character {
        self.queue
            .pop_front()
            .or_else(|| self.pull())
            .map(|(c, source)| Character::At(c, source))
            .unwrap_or_else(|| self.end())
    }

    fn peek_nth(&mut self, n: usize) -> Character {
        while self.queue.len() <= n {
            match self.pull() {
                Some(entry) => self.queue.push_back(entry),
                None => return self.end(),
            }
        }

        let (c, source) = self.queue[n];
        Character::At(c, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source_files::SourceFiles;

    #[test]
    fn tracks_locations_across_lines() {
        let mut text = TextPeeker::new("ab\ncd".chars(), SourceFiles::INTERNAL_KEY);

        assert!(text.peek_nth(3).is('c'));
        assert!(text.eat("ab"));
        assert!(text.eat('\n'));

        let Character::At(c, source) = text.next() else {
            panic!("expected character");
        };
        assert_eq!(c, 'c');
        assert_eq!(source.location, Location::new(2, 1));

        assert!(text.eat("d"));
        assert!(text.peek().is_end());
        assert_eq!(text.source().location, Location::new(2, 3));
    }

    #[test]
    fn failed_eat_consumes_nothing() {
        let mut text = TextPeeker::new("/*x".chars(), SourceFiles::INTERNAL_KEY);
        assert!(!text.eat("//"));
        assert!(text.eat("/*"));
        assert!(text.peek().is('x'));
    }
}
