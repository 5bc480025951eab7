use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::hash::Hash;
use std::iter;

use crate::build::{Builder, Stats};
use crate::symbol::{self, Symbol};

/// An index of a node in a suffix tree.
///
/// Node ids are only meaningful for the tree that handed them out.
pub type NodeId = usize;

/// The root is always the first node allocated.
pub(crate) const ROOT: NodeId = 0;

/// Marks a node whose suffix link has not been assigned (yet).
pub(crate) const NO_LINK: NodeId = NodeId::max_value();

/// A suffix tree built with Ukkonen's algorithm.
///
/// The tree indexes a text over any alphabet whose symbols can be compared
/// for equality and hashed. The text is widened with a single
/// [`Symbol::Terminal`](enum.Symbol.html) so that every suffix ends at its
/// own leaf.
///
/// Nodes live in one flat arena and refer to each other by `NodeId`. Edges
/// are stored in their parent, keyed by the first symbol of their label.
/// Labels are ranges into the text; the labels of leaf edges all end at the
/// tree's single shared leaf end (see [`End`](enum.End.html)).
pub struct SuffixTree<T> {
    text: Vec<Symbol<T>>,
    nodes: Vec<Node<T>>,
    leaf_end: usize,
    stats: Stats,
}

/// A node in a suffix tree.
pub struct Node<T> {
    children: HashMap<Symbol<T>, Edge>,
    link: NodeId,
    suffix: Option<usize>,
}

/// An edge from a parent node to a child node.
///
/// The edge is labeled with `text[start..end]`, where `end` is resolved
/// through the owning tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    start: usize,
    end: End,
    target: NodeId,
}

/// The (exclusive) end of an edge label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum End {
    /// The label ends at a fixed offset.
    Fixed(usize),
    /// The label ends at the tree's shared leaf end.
    ///
    /// During construction the shared end moves forward once per phase,
    /// which extends every leaf edge at once.
    Leaf,
}

impl<T: Clone + Eq + Hash> SuffixTree<T> {
    /// Build a suffix tree for `text` in time and space linear in its
    /// length.
    ///
    /// This never fails. An empty text yields a root with a single leaf
    /// edge labeled by the terminal.
    pub fn new<I>(text: I) -> SuffixTree<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut st = SuffixTree::init(symbol::terminated(text));
        let stats = Builder::new(&mut st).run();
        st.stats = stats;
        st
    }

    fn init(text: Vec<Symbol<T>>) -> SuffixTree<T> {
        // A tree over `n` symbols has at most `n` leaves and `n - 1`
        // internal nodes, plus the root.
        let mut nodes = Vec::with_capacity(2 * text.len());
        nodes.push(Node::internal());
        SuffixTree { text, nodes, leaf_end: 0, stats: Stats::default() }
    }

    pub(crate) fn edge_at(&self, node: NodeId, key: &Symbol<T>) -> Option<Edge> {
        self.nodes[node].children.get(key).copied()
    }

    pub(crate) fn set_edge(&mut self, node: NodeId, key: Symbol<T>, edge: Edge) {
        self.nodes[node].children.insert(key, edge);
    }
}

impl<T> SuffixTree<T> {
    /// The number of symbols in the indexed text, not counting the
    /// terminal.
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    /// Returns true if and only if the indexed text is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The indexed text, including the trailing terminal.
    pub fn text(&self) -> &[Symbol<T>] {
        &self.text
    }

    /// Retrieve the root node id.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// When `id` was not handed out by this tree.
    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }

    /// The total number of nodes, including the root and the leaves.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The current value of the shared end of all leaf edges.
    ///
    /// Once construction is done, this is the length of `text()`.
    pub fn leaf_end(&self) -> usize {
        self.leaf_end
    }

    /// Counters recorded while this tree was built.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The label of `edge`.
    pub fn label(&self, edge: &Edge) -> &[Symbol<T>] {
        &self.text[edge.start..self.end_of(edge)]
    }

    /// The length of the label of `edge`.
    pub fn edge_len(&self, edge: &Edge) -> usize {
        self.end_of(edge) - edge.start
    }

    fn end_of(&self, edge: &Edge) -> usize {
        match edge.end {
            End::Fixed(end) => end,
            End::Leaf => self.leaf_end,
        }
    }

    /// Traverse all node ids in preorder, starting at the root.
    ///
    /// Siblings are visited in no particular order.
    pub fn preorder<'t>(&'t self) -> Preorder<'t, T> {
        Preorder { st: self, stack: vec![ROOT] }
    }

    /// An iterator over all leaf node ids.
    pub fn leaves<'t>(&'t self) -> Leaves<'t, T> {
        Leaves { it: self.preorder() }
    }

    /// An iterator over the starting offset of the suffix spelled by each
    /// leaf.
    pub fn suffix_indices<'t>(&'t self) -> SuffixIndices<'t, T> {
        SuffixIndices { it: self.leaves() }
    }

    pub(crate) fn symbol(&self, i: usize) -> &Symbol<T> {
        &self.text[i]
    }

    pub(crate) fn add_leaf(&mut self, suffix: usize) -> NodeId {
        self.nodes.push(Node::leaf(suffix));
        self.nodes.len() - 1
    }

    pub(crate) fn add_internal(&mut self) -> NodeId {
        self.nodes.push(Node::internal());
        self.nodes.len() - 1
    }

    pub(crate) fn set_link(&mut self, node: NodeId, link: NodeId) {
        debug_assert!(self.nodes[link].suffix.is_none());
        self.nodes[node].link = link;
    }

    pub(crate) fn set_leaf_end(&mut self, end: usize) {
        debug_assert!(end >= self.leaf_end);
        self.leaf_end = end;
    }
}

impl<T> Node<T> {
    fn leaf(suffix: usize) -> Node<T> {
        Node { children: HashMap::new(), link: NO_LINK, suffix: Some(suffix) }
    }

    fn internal() -> Node<T> {
        Node { children: HashMap::new(), link: NO_LINK, suffix: None }
    }

    /// An iterator over all outgoing edges of this node.
    pub fn edges<'t>(&'t self) -> Edges<'t, T> {
        Edges { it: self.children.values() }
    }

    /// The number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.children.len()
    }

    /// The suffix link of this node, if it has one.
    ///
    /// Every internal node other than the root has one once construction
    /// is done.
    pub fn suffix_link(&self) -> Option<NodeId> {
        if self.link == NO_LINK {
            None
        } else {
            Some(self.link)
        }
    }

    /// For a leaf, the offset where the suffix it spells starts.
    pub fn suffix(&self) -> Option<usize> {
        self.suffix
    }

    /// Returns true if and only if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.suffix.is_some()
    }
}

impl<T: Eq + Hash> Node<T> {
    /// The outgoing edge whose label starts with `first`.
    pub fn edge(&self, first: &Symbol<T>) -> Option<&Edge> {
        self.children.get(first)
    }
}

impl Edge {
    pub(crate) fn new(start: usize, end: End, target: NodeId) -> Edge {
        Edge { start, end, target }
    }

    /// Where the label of this edge starts in the text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Where the label of this edge ends in the text.
    pub fn end(&self) -> End {
        self.end
    }

    /// The node this edge leads to.
    pub fn target(&self) -> NodeId {
        self.target
    }
}

impl<T: fmt::Display> fmt::Debug for SuffixTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt<T: fmt::Display>(
            f: &mut fmt::Formatter,
            st: &SuffixTree<T>,
            node: NodeId,
            depth: usize,
        ) -> fmt::Result {
            let indent: String = iter::repeat(' ').take(depth * 2).collect();
            for edge in st.node(node).edges() {
                write!(f, "{}", indent)?;
                for sym in st.label(edge) {
                    write!(f, "{}", sym)?;
                }
                writeln!(f)?;
                fmt(f, st, edge.target, depth + 1)?;
            }
            Ok(())
        }
        writeln!(f, "\n-----------------------------------------")?;
        writeln!(f, "SUFFIX TREE")?;
        write!(f, "text: ")?;
        for sym in &self.text {
            write!(f, "{}", sym)?;
        }
        writeln!(f)?;
        writeln!(f, "ROOT")?;
        fmt(f, self, ROOT, 1)?;
        writeln!(f, "-----------------------------------------")
    }
}

impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Node {{ len(children): {}, suffix: {:?}, suffix link? {} }}",
            self.children.len(),
            self.suffix,
            self.suffix_link().map(|_| "yes").unwrap_or("no")
        )
    }
}

/// An iterator over the outgoing edges of a node.
///
/// `'t` is the lifetime of the suffix tree.
pub struct Edges<'t, T> {
    it: hash_map::Values<'t, Symbol<T>, Edge>,
}

impl<'t, T> Iterator for Edges<'t, T> {
    type Item = &'t Edge;

    fn next(&mut self) -> Option<&'t Edge> {
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'t, T> ExactSizeIterator for Edges<'t, T> {}

/// An iterator over node ids in preorder.
///
/// `'t` is the lifetime of the suffix tree.
pub struct Preorder<'t, T> {
    st: &'t SuffixTree<T>,
    stack: Vec<NodeId>,
}

impl<'t, T> Iterator for Preorder<'t, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        match self.stack.pop() {
            None => None,
            Some(id) => {
                let edges = self.st.node(id).edges();
                self.stack.extend(edges.map(|e| e.target));
                Some(id)
            }
        }
    }
}

/// An iterator over leaf node ids.
///
/// `'t` is the lifetime of the suffix tree.
pub struct Leaves<'t, T> {
    it: Preorder<'t, T>,
}

impl<'t, T> Iterator for Leaves<'t, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let st = self.it.st;
        self.it.by_ref().find(|&id| st.node(id).is_leaf())
    }
}

/// An iterator over the suffix offsets recorded on leaves.
///
/// `'t` is the lifetime of the suffix tree.
pub struct SuffixIndices<'t, T> {
    it: Leaves<'t, T>,
}

impl<'t, T> Iterator for SuffixIndices<'t, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let st = self.it.it.st;
        self.it.next().and_then(|id| st.node(id).suffix())
    }
}
