// Online construction of a suffix tree, one phase per text position.
//
// Phase `i` makes every suffix of `text[..=i]` present in the tree. Three
// rules apply when extending a suffix by `text[i]`:
//
//   1) The suffix ends at a leaf. Nothing to do: bumping the shared leaf
//      end at the start of the phase already extended it.
//   2) The suffix ends somewhere with no continuation by `text[i]`. Add a
//      new leaf there, splitting an edge if we're in the middle of one.
//   3) The continuation is already there. Then it is for every shorter
//      suffix too, so the rest of the phase is a no-op.
//
// `remainder` counts the suffixes that still need an explicit leaf and the
// active point marks where the longest of them ends.

use std::hash::Hash;

use log::{debug, trace};

use crate::symbol::Symbol;
use crate::tree::{Edge, End, NodeId, SuffixTree, NO_LINK, ROOT};

/// Counters recorded while building a suffix tree.
///
/// Every iteration of the extension loop is counted in `steps` and does
/// exactly one of: add a leaf (rule 2), jump over a whole edge, or stop the
/// phase (rule 3). So `steps == leaves + skips + showstoppers`. Since a
/// skip consumes at least one symbol of the active length, and only rule 3
/// grows it, there are never more skips than showstoppers. This bounds the
/// total work by three times the length of the terminated text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// The number of phases, i.e., the length of the terminated text.
    pub phases: usize,
    /// Iterations of the extension loop across all phases.
    pub steps: usize,
    /// Whole edges jumped over while walking down to the active point.
    pub skips: usize,
    /// Leaves added (rule 2).
    pub leaves: usize,
    /// Rule 2 extensions that had to split an edge.
    pub splits: usize,
    /// Phases that ended early because of rule 3.
    pub showstoppers: usize,
}

/// Where the longest suffix still waiting for its leaf ends: `len` symbols
/// down the edge out of `node` that starts with `text[edge]`.
#[derive(Clone, Copy, Debug)]
struct ActivePoint {
    node: NodeId,
    edge: usize,
    len: usize,
}

pub(crate) struct Builder<'t, T> {
    st: &'t mut SuffixTree<T>,
    active: ActivePoint,
    remainder: usize,
    stats: Stats,
}

impl<'t, T: Clone + Eq + Hash> Builder<'t, T> {
    pub(crate) fn new(st: &'t mut SuffixTree<T>) -> Builder<'t, T> {
        Builder {
            st,
            active: ActivePoint { node: ROOT, edge: 0, len: 0 },
            remainder: 0,
            stats: Stats::default(),
        }
    }

    pub(crate) fn run(mut self) -> Stats {
        let n = self.st.text().len();
        for pos in 0..n {
            self.phase(pos);
        }
        // The terminal matches nothing, so its phase empties the queue.
        debug_assert_eq!(self.remainder, 0);
        debug!(
            "built suffix tree: {} symbols, {} nodes, {:?}",
            n,
            self.st.node_count(),
            self.stats
        );
        self.stats
    }

    fn phase(&mut self, pos: usize) {
        self.stats.phases += 1;
        // Rule 1, for every leaf at once.
        self.st.set_leaf_end(pos + 1);
        self.remainder += 1;

        // The internal node created by the previous extension of this
        // phase, which still needs its suffix link.
        let mut pending = NO_LINK;
        while self.remainder > 0 {
            self.stats.steps += 1;
            if self.active.len == 0 {
                self.active.edge = pos;
            }
            let key = self.st.symbol(self.active.edge).clone();
            match self.st.edge_at(self.active.node, &key) {
                None => {
                    debug_assert_eq!(self.active.len, 0);
                    self.add_leaf(self.active.node, pos);
                    trace!(
                        "phase {}: leaf for suffix {} at node {}",
                        pos,
                        pos + 1 - self.remainder,
                        self.active.node
                    );
                    self.link(&mut pending, self.active.node);
                }
                Some(edge) => {
                    if self.skip(&edge) {
                        continue;
                    }
                    let next = edge.start() + self.active.len;
                    if self.st.symbol(next) == self.st.symbol(pos) {
                        self.active.len += 1;
                        self.stats.showstoppers += 1;
                        trace!(
                            "phase {}: {} suffixes already present, \
                             active point {:?}",
                            pos,
                            self.remainder,
                            self.active
                        );
                        self.link(&mut pending, self.active.node);
                        break;
                    }
                    let split = self.split(key, edge, pos);
                    trace!(
                        "phase {}: split at node {} for suffix {}",
                        pos,
                        split,
                        pos + 1 - self.remainder
                    );
                    self.link(&mut pending, split);
                    pending = split;
                }
            }
            self.remainder -= 1;
            self.follow_link(pos);
        }
    }

    /// Moves the active point down over `edge` if the active length covers
    /// all of it (the skip/count trick).
    fn skip(&mut self, edge: &Edge) -> bool {
        let len = self.st.edge_len(edge);
        if self.active.len < len {
            return false;
        }
        self.active.edge += len;
        self.active.len -= len;
        self.active.node = edge.target();
        self.stats.skips += 1;
        true
    }

    /// Splits `edge` (keyed by `key` in the active node) at the active
    /// point and hangs a new leaf for `text[pos]` off the new node.
    fn split(&mut self, key: Symbol<T>, edge: Edge, pos: usize) -> NodeId {
        let at = edge.start() + self.active.len;
        let split = self.st.add_internal();
        self.st.set_edge(
            self.active.node,
            key,
            Edge::new(edge.start(), End::Fixed(at), split),
        );
        let rest = self.st.symbol(at).clone();
        self.st.set_edge(split, rest, Edge::new(at, edge.end(), edge.target()));
        self.add_leaf(split, pos);
        self.stats.splits += 1;
        split
    }

    /// Adds a leaf edge for `text[pos..]` to `parent`, spelling the oldest
    /// suffix still pending.
    fn add_leaf(&mut self, parent: NodeId, pos: usize) {
        let leaf = self.st.add_leaf(pos + 1 - self.remainder);
        let key = self.st.symbol(pos).clone();
        self.st.set_edge(parent, key, Edge::new(pos, End::Leaf, leaf));
        self.stats.leaves += 1;
    }

    /// Assigns `to` as the suffix link of the pending node, if any.
    fn link(&mut self, pending: &mut NodeId, to: NodeId) {
        if *pending != NO_LINK {
            self.st.set_link(*pending, to);
            *pending = NO_LINK;
        }
    }

    /// Moves the active point to the next shorter suffix.
    fn follow_link(&mut self, pos: usize) {
        if self.active.node == ROOT {
            if self.active.len > 0 {
                self.active.len -= 1;
                self.active.edge = pos + 1 - self.remainder;
            }
        } else {
            let node = self.st.node(self.active.node);
            self.active.node = node.suffix_link().unwrap_or(ROOT);
        }
    }
}
