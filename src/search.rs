use std::hash::Hash;

use crate::symbol::Symbol;
use crate::tree::SuffixTree;

impl<T: Clone + Eq + Hash> SuffixTree<T> {
    /// Returns true if and only if `pattern` occurs somewhere in the
    /// indexed text.
    ///
    /// This walks down from the root, comparing whole edge labels, so it
    /// takes time linear in the length of `pattern`. The pattern may end
    /// in the middle of an edge. The empty pattern is in every text.
    ///
    /// ```rust
    /// use ukkonen::SuffixTree;
    ///
    /// let st = SuffixTree::new("banana".chars());
    /// assert!(st.contains("nan".chars()));
    /// assert!(!st.contains("nab".chars()));
    /// ```
    pub fn contains<I>(&self, pattern: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut pattern = pattern.into_iter();
        let mut node = self.root();
        loop {
            let first = match pattern.next() {
                None => return true,
                Some(c) => Symbol::Char(c),
            };
            let edge = match self.node(node).edge(&first) {
                None => return false,
                Some(edge) => edge,
            };
            // The first symbol of the label is the one we looked it up by.
            for sym in &self.label(edge)[1..] {
                match pattern.next() {
                    None => return true,
                    Some(c) => {
                        if sym.as_char() != Some(&c) {
                            return false;
                        }
                    }
                }
            }
            node = edge.target();
        }
    }
}
