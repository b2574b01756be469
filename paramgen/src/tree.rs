//! Dotted-path trees.
//!
//! A [`PathTree`] maps each declared dotted path onto a chain of nodes. The
//! same builder runs twice per model build, once keyed by parameter name and
//! once keyed by serialization key, producing two independent trees that
//! borrow the same resolved parameters.
//!
//! Children are held in an [`IndexMap`] so enumeration follows the order in
//! which paths were first inserted, which is the declaration order.

use indexmap::IndexMap;

use crate::error::BuildError;
use crate::parameter::Parameter;

/// A node of a [`PathTree`].
///
/// A node is either a branch (children, no parameter) or a leaf (a
/// parameter, no children). Only the root may be both childless and
/// parameterless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode<'a> {
    name: String,
    children: IndexMap<String, PathNode<'a>>,
    parameter: Option<&'a Parameter>,
}

impl<'a> PathNode<'a> {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            children: IndexMap::new(),
            parameter: None,
        }
    }

    /// Path segment naming this node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter attached to a leaf.
    #[must_use]
    pub const fn parameter(&self) -> Option<&'a Parameter> {
        self.parameter
    }

    /// Whether this node terminates a declared path.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.parameter.is_some()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &PathNode<'a>> {
        self.children.values()
    }

    /// Branch children in insertion order.
    pub fn branches(&self) -> impl Iterator<Item = &PathNode<'a>> {
        self.children().filter(|child| !child.is_leaf())
    }

    /// Leaf children with their parameters, in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = (&PathNode<'a>, &'a Parameter)> {
        self.children()
            .filter_map(|child| child.parameter.map(|parameter| (child, parameter)))
    }

    /// Looks up a direct child by segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&PathNode<'a>> {
        self.children.get(segment)
    }
}

/// A tree of dotted paths with parameters attached at the leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree<'a> {
    root: PathNode<'a>,
}

impl<'a> PathTree<'a> {
    /// Creates an empty tree whose root carries `root_name`.
    #[must_use]
    pub fn new(root_name: &str) -> Self {
        Self {
            root: PathNode::new(root_name),
        }
    }

    /// Builds a tree from `parameters`, keying each by the path `key` selects.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError::StructuralPathConflict`] raised by
    /// [`PathTree::insert`].
    pub fn build<F>(root_name: &str, parameters: &'a [Parameter], key: F) -> Result<Self, BuildError>
    where
        F: Fn(&'a Parameter) -> &'a str,
    {
        let mut tree = Self::new(root_name);
        for parameter in parameters {
            tree.insert(key(parameter), parameter)?;
        }
        Ok(tree)
    }

    /// The root node.
    #[must_use]
    pub const fn root(&self) -> &PathNode<'a> {
        &self.root
    }

    /// Attaches `parameter` at `path`, creating intermediate branches.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::StructuralPathConflict`] when:
    /// - the walk passes through a node that already holds a parameter (the
    ///   error names that shorter path);
    /// - the target node already has children or a parameter (the error names
    ///   `path`);
    /// - `path` contains an empty segment.
    pub fn insert(&mut self, path: &str, parameter: &'a Parameter) -> Result<(), BuildError> {
        let mut node = &mut self.root;
        let mut prefix = String::with_capacity(path.len());
        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(BuildError::path_conflict(path));
            }
            if node.is_leaf() {
                return Err(BuildError::path_conflict(prefix));
            }
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(segment);
            node = node
                .children
                .entry(segment.to_owned())
                .or_insert_with(|| PathNode::new(segment));
        }
        if node.is_leaf() || !node.children.is_empty() {
            return Err(BuildError::path_conflict(path));
        }
        node.parameter = Some(parameter);
        Ok(())
    }
}
