/*!
This crate builds suffix trees online, in linear time and space, using
Ukkonen's algorithm, and answers substring queries against them.

A suffix tree is a compressed trie of every suffix of a text. Once built,
asking whether a pattern occurs anywhere in the text takes time
proportional to the length of the pattern, regardless of the size of the
text.

# Usage

Any sequence of symbols that can be compared and hashed can be indexed.
Strings are indexed by their `char`s:

```rust
use ukkonen::SuffixTree;

let st = SuffixTree::new("banana".chars());
assert!(st.contains("ana".chars()));
assert!(!st.contains("xyz".chars()));
```

and DNA (or any other bytes) by their bytes:

```rust
let st = ukkonen::build(b"ACGTACGT".iter().copied());
assert!(ukkonen::has_substring(&st, b"ACG".iter().copied()));
```

# Structure

The tree is stored as a flat arena of nodes that refer to each other by
index. Edge labels are ranges into the indexed text. Since the text is
always widened by a unique [`Symbol::Terminal`](enum.Symbol.html), a tree
over a text of length `n` has exactly `n + 1` leaves, one per suffix.

While a tree is built, every leaf edge reads its end from one shared
value instead of storing its own. Advancing that value once per phase
extends all leaves at once, which is what keeps construction linear.
The counters in [`Stats`](struct.Stats.html) make this observable.

A finished tree is never mutated again, so it can be shared between
threads for querying.
*/

#![deny(missing_docs)]

use std::hash::Hash;

pub use crate::build::Stats;
pub use crate::symbol::Symbol;
pub use crate::tree::{
    Edge, Edges, End, Leaves, Node, NodeId, Preorder, SuffixIndices,
    SuffixTree,
};

mod build;
mod search;
mod symbol;
mod tree;

/// Build a suffix tree for `text`.
///
/// This is the same as `SuffixTree::new(text)`.
pub fn build<T, I>(text: I) -> SuffixTree<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    SuffixTree::new(text)
}

/// Returns true if and only if `pattern` occurs in the text indexed by
/// `tree`.
///
/// This is the same as `tree.contains(pattern)`.
pub fn has_substring<T, I>(tree: &SuffixTree<T>, pattern: I) -> bool
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    tree.contains(pattern)
}
