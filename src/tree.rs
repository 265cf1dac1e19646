use crate::alphabet::{FrequencyTable, Symbol};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Errors that can occur while building a tree
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("Cannot build a Huffman tree from empty input")]
    EmptyInput,
}

/// A node of a Huffman tree. Internal nodes always own exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<S: Symbol> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S: Symbol> Node<S> {
    /// The combined frequency of every symbol below this node.
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol stored at a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<S> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Join two subtrees under a new internal node, `a` on the left.
    fn merge(a: Self, b: Self) -> Self {
        Node::Internal {
            weight: a.weight() + b.weight(),
            left: Box::new(a),
            right: Box::new(b),
        }
    }
}

/// An entry in the build queue. Ordered by weight, then by the order in
/// which entries were inserted, so that equal weights pop oldest-first.
struct Pending<S: Symbol> {
    weight: usize,
    sequence: usize,
    node: Node<S>,
}

impl<S: Symbol> Pending<S> {
    fn key(&self) -> (usize, usize) {
        (self.weight, self.sequence)
    }
}

impl<S: Symbol> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S: Symbol> Eq for Pending<S> {}

impl<S: Symbol> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Symbol> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A Huffman tree: the root node plus the number of leaves below it.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree<S: Symbol> {
    root: Node<S>,
    leaf_count: usize,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree for the given frequencies by repeatedly merging the two
    /// lightest nodes.
    ///
    /// Ties between equal weights are broken by insertion order: leaves are
    /// inserted in the table's first-occurrence order and every merged node
    /// is inserted after all nodes that came before it. The same table
    /// therefore always produces the same tree.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self, BuildError> {
        let mut queue = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0;

        for (symbol, weight) in frequencies.iter() {
            queue.push(Reverse(Pending {
                weight,
                sequence,
                node: Node::Leaf { symbol, weight },
            }));
            sequence += 1;
        }

        let leaf_count = queue.len();

        while queue.len() > 1 {
            let (Some(Reverse(a)), Some(Reverse(b))) = (queue.pop(), queue.pop()) else {
                break;
            };
            log::trace!(
                "Merging nodes of weight {} and {} into {}",
                a.weight,
                b.weight,
                a.weight + b.weight
            );
            let node = Node::merge(a.node, b.node);
            queue.push(Reverse(Pending {
                weight: node.weight(),
                sequence,
                node,
            }));
            sequence += 1;
        }

        let Reverse(Pending { node: root, .. }) = queue.pop().ok_or(BuildError::EmptyInput)?;
        log::debug!(
            "Built Huffman tree with {leaf_count} leaves and total weight {}",
            root.weight()
        );

        Ok(Self { root, leaf_count })
    }

    /// Count the given input and build its tree in one step.
    pub fn from_symbols<I>(input: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_frequencies(&FrequencyTable::from_symbols(input))
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// The root's weight, equal to the length of the input the tree was built from.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// The number of distinct symbols in the tree.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Whether the tree is a single leaf, i.e. the alphabet has one symbol.
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    /// The number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => height = height.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        height
    }
}
