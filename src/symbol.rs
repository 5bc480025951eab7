use std::fmt;

/// A symbol of an indexed text.
///
/// Every text handed to a suffix tree is widened by one synthetic symbol,
/// `Terminal`, which is appended exactly once at the end. Since it is a
/// separate variant it can never be equal to any `Char`, no matter which
/// alphabet the caller uses. This is what makes every suffix end at its
/// own leaf.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Symbol<T> {
    /// A symbol taken from the caller's text.
    Char(T),
    /// The unique end-of-text marker.
    Terminal,
}

impl<T> Symbol<T> {
    /// Returns true if and only if this is the end-of-text marker.
    pub fn is_terminal(&self) -> bool {
        match *self {
            Symbol::Terminal => true,
            Symbol::Char(_) => false,
        }
    }

    /// Returns the caller's symbol, if this is one.
    pub fn as_char(&self) -> Option<&T> {
        match *self {
            Symbol::Char(ref c) => Some(c),
            Symbol::Terminal => None,
        }
    }
}

impl<T> From<T> for Symbol<T> {
    fn from(c: T) -> Symbol<T> {
        Symbol::Char(c)
    }
}

/// Writes a `Char` as its inner value and the terminal as `$`.
impl<T: fmt::Display> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Symbol::Char(ref c) => c.fmt(f),
            Symbol::Terminal => write!(f, "$"),
        }
    }
}

/// Widens `text` into the symbol buffer a tree is built over.
pub(crate) fn terminated<T, I>(text: I) -> Vec<Symbol<T>>
where
    I: IntoIterator<Item = T>,
{
    let it = text.into_iter();
    let mut buf = Vec::with_capacity(it.size_hint().0 + 1);
    buf.extend(it.map(Symbol::Char));
    buf.push(Symbol::Terminal);
    buf
}

#[cfg(test)]
mod tests {
    use super::{terminated, Symbol};

    #[test]
    fn terminal_is_last_and_unique() {
        let buf = terminated("aa$".chars());
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[2], Symbol::Char('$'));
        assert_eq!(buf[3], Symbol::Terminal);
        assert_eq!(buf.iter().filter(|s| s.is_terminal()).count(), 1);
    }

    #[test]
    fn empty_text_is_only_terminal() {
        let buf = terminated(Vec::<u8>::new());
        assert_eq!(buf, vec![Symbol::Terminal]);
    }

    #[test]
    fn terminal_never_equals_char() {
        assert!(Symbol::Char(u64::max_value()) != Symbol::Terminal);
        assert_eq!(Symbol::Char('x').as_char(), Some(&'x'));
        assert_eq!(Symbol::<char>::Terminal.as_char(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Symbol::Char('a').to_string(), "a");
        assert_eq!(Symbol::<char>::Terminal.to_string(), "$");
    }
}
