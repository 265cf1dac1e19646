use crate::alphabet::Symbol;
use crate::tree::{HuffmanTree, Node};
use crate::{RECURSION_LEAF_LIMIT, SINGLE_SYMBOL_BIT};
use biterator::Bit;
use std::collections::HashMap;
use std::fmt;

/// The bits on the path from the root of a tree to one of its leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<Bit>);

impl Code {
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for codes produced by the generator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this code is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<Bit>> for Code {
    fn from(bits: Vec<Bit>) -> Self {
        Code(bits)
    }
}

/// Codes render as strings of `0` and `1`.
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// A prefix-free mapping from symbols to codes, derived from one tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, Code>,
}

impl<S: Symbol> CodeTable<S> {
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// The number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.codes.iter()
    }
}

/// How the generator walks the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Recurse for trees with at most `RECURSION_LEAF_LIMIT` leaves, use an
    /// explicit stack otherwise.
    #[default]
    Auto,
    /// Depth-first recursion. Stack depth grows with the tree's height.
    Recursive,
    /// Depth-first walk with a heap-allocated stack.
    Iterative,
}

/// Derives code tables from Huffman trees.
///
/// Every call to [`CodeGenerator::generate`] starts from a new, empty table,
/// so tables never carry entries over from earlier trees.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    traversal: Traversal,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the traversal strategy. All strategies produce identical tables.
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Produce the code for every leaf of the tree. Left edges are
    /// `Bit::Zero`, right edges `Bit::One`.
    ///
    /// A single-leaf tree has no edges, so its symbol gets the one-bit code
    /// `SINGLE_SYMBOL_BIT`.
    pub fn generate<S: Symbol>(&self, tree: &HuffmanTree<S>) -> CodeTable<S> {
        let mut codes = HashMap::with_capacity(tree.leaf_count());

        if let Node::Leaf { symbol, .. } = tree.root() {
            codes.insert(*symbol, Code(vec![SINGLE_SYMBOL_BIT]));
            return CodeTable { codes };
        }

        let traversal = match self.traversal {
            Traversal::Auto if tree.leaf_count() <= RECURSION_LEAF_LIMIT => Traversal::Recursive,
            Traversal::Auto => Traversal::Iterative,
            other => other,
        };

        match traversal {
            Traversal::Recursive => walk_recursive(tree.root(), &mut Vec::new(), &mut codes),
            _ => walk_iterative(tree.root(), &mut codes),
        }

        log::debug!(
            "Generated {} codes ({traversal:?}), longest is {} bits",
            codes.len(),
            codes.values().map(Code::len).max().unwrap_or(0)
        );

        CodeTable { codes }
    }
}

fn walk_recursive<S: Symbol>(node: &Node<S>, path: &mut Vec<Bit>, codes: &mut HashMap<S, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, Code(path.clone()));
        }
        Node::Internal { left, right, .. } => {
            path.push(Bit::Zero);
            walk_recursive(left, path, codes);
            path.pop();

            path.push(Bit::One);
            walk_recursive(right, path, codes);
            path.pop();
        }
    }
}

fn walk_iterative<S: Symbol>(root: &Node<S>, codes: &mut HashMap<S, Code>) {
    // Each entry is a node and the length of its path; `path` holds the bits
    // of the most recently visited branch and is truncated on backtrack.
    let mut path: Vec<Bit> = Vec::new();
    let mut stack = vec![(root, None, 0)];

    while let Some((node, edge, depth)) = stack.pop() {
        path.truncate(depth);
        if let Some(bit) = edge {
            path.push(bit);
        }

        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, Code(path.clone()));
            }
            Node::Internal { left, right, .. } => {
                let depth = path.len();
                stack.push((right.as_ref(), Some(Bit::One), depth));
                stack.push((left.as_ref(), Some(Bit::Zero), depth));
            }
        }
    }
}
