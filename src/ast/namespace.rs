//! Namespace chains and the table that interns them.
//!
//! A qualified name such as `a.b.T` is stored as a chain of [`NamespaceNode`]s,
//! read from the innermost segment (`b`) outward to the root (`a`). Chains are
//! shared: any number of reference nodes may hold a handle to the same segment,
//! so a chain is reached through the [`Namespace`] handle rather than owned by the
//! node that mentions it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, OnceLock};

/// One segment of a namespace chain.
///
/// The node owns its identifier. Its parent is shared, since many chains may
/// extend the same prefix.
#[derive(Debug, PartialEq)]
pub struct NamespaceNode {
    parent: Option<Namespace>,
    ident: String,
}

impl NamespaceNode {
    /// The identifier of this segment. Empty for the unqualified scope.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The enclosing segment, or `None` at the root of the chain.
    pub fn parent(&self) -> Option<&Namespace> {
        self.parent.as_ref()
    }
}

/// A shared handle to a [`NamespaceNode`].
///
/// Cloning is cheap and keeps pointing at the same segment. A chain is built from
/// the root outward, each child holding an immutable handle to an already built
/// parent, so a chain can never loop back on itself.
#[derive(Debug, Clone)]
pub struct Namespace(Arc<NamespaceNode>);

impl Namespace {
    /// A chain root: a namespace with no parent.
    pub fn root(ident: impl Into<String>) -> Namespace {
        Namespace(Arc::new(NamespaceNode { parent: None, ident: ident.into() }))
    }

    /// A segment nested inside `parent`.
    pub fn child(parent: &Namespace, ident: impl Into<String>) -> Namespace {
        Namespace(Arc::new(NamespaceNode { parent: Some(parent.clone()), ident: ident.into() }))
    }

    /// Builds a chain from a root-first path, e.g. `["a", "b"]` for `a.b`.
    ///
    /// Returns `None` for an empty path, which names no segment at all.
    pub fn from_path<S: AsRef<str>>(path: &[S]) -> Option<Namespace> {
        let (first, rest) = path.split_first()?;

        let mut namespace = Namespace::root(first.as_ref());
        for segment in rest {
            namespace = Namespace::child(&namespace, segment.as_ref());
        }

        Some(namespace)
    }

    /// The namespace given to references written without any qualification.
    ///
    /// This is a single process-wide value. Every unqualified reference holds a
    /// handle to the same node, which is what [`is_unqualified`](Self::is_unqualified)
    /// checks for.
    pub fn unqualified() -> Namespace {
        static UNQUALIFIED: OnceLock<Namespace> = OnceLock::new();

        UNQUALIFIED.get_or_init(|| Namespace::root("")).clone()
    }

    /// True only for the [`unqualified`](Self::unqualified) sentinel.
    ///
    /// An explicitly written empty namespace is *not* unqualified, even though it
    /// is structurally identical.
    pub fn is_unqualified(&self) -> bool {
        Arc::ptr_eq(&self.0, &Namespace::unqualified().0)
    }

    /// True for a lone segment with an empty identifier, whether it is the
    /// sentinel or was written out explicitly. Both render and resolve the same.
    pub fn is_empty(&self) -> bool {
        self.0.parent.is_none() && self.0.ident.is_empty()
    }

    pub fn node(&self) -> &NamespaceNode {
        &self.0
    }

    pub fn ident(&self) -> &str {
        &self.0.ident
    }

    pub fn parent(&self) -> Option<&Namespace> {
        self.0.parent.as_ref()
    }

    /// Walks the chain outward: this segment first, the root last.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// The number of parent links between this segment and the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// The identifiers of the chain, root first.
    pub fn path(&self) -> Vec<&str> {
        let mut path: Vec<&str> = self.ancestors().map(Namespace::ident).collect();
        path.reverse();
        path
    }

    /// True if both handles point at the very same segment.
    pub fn ptr_eq(&self, other: &Namespace) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Namespace::unqualified()
    }
}

/// Structural equality, except that the unqualified sentinel only equals itself.
impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.is_unqualified() == other.is_unqualified() && self.path() == other.path()
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path().join("."))
    }
}

/// Iterator over a namespace chain, innermost segment first.
pub struct Ancestors<'a> {
    next: Option<&'a Namespace>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Namespace;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/* Serialization: a chain travels as its root-first path. */

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.path().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = Vec::<String>::deserialize(deserializer)?;

        Namespace::from_path(&path)
            .ok_or_else(|| D::Error::custom("a namespace path must name at least one segment"))
    }
}

/// Interns namespace chains by their root-first path.
///
/// Asking for the same path twice yields handles to the same segment, and chains
/// that share a prefix share the segments of that prefix. Meant to be owned by
/// whatever builds trees (typically a parser's symbol table).
#[derive(Debug, Default)]
pub struct NamespaceTable {
    chains: HashMap<Vec<String>, Namespace>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        NamespaceTable { chains: HashMap::new() }
    }

    /// Returns the shared chain for `path`, creating any missing segments.
    ///
    /// An empty path means "no qualification" and yields the unqualified sentinel,
    /// which is never stored in the table.
    pub fn intern<S: AsRef<str>>(&mut self, path: &[S]) -> Namespace {
        let mut current: Option<Namespace> = None;
        let mut prefix: Vec<String> = Vec::with_capacity(path.len());

        for segment in path {
            prefix.push(segment.as_ref().to_string());

            let namespace = match self.chains.get(&prefix) {
                Some(existing) => existing.clone(),
                None => {
                    let created = match &current {
                        Some(parent) => Namespace::child(parent, segment.as_ref()),
                        None => Namespace::root(segment.as_ref()),
                    };
                    log::debug!("interned namespace `{}`", prefix.join("."));
                    self.chains.insert(prefix.clone(), created.clone());
                    created
                }
            };

            current = Some(namespace);
        }

        current.unwrap_or_else(Namespace::unqualified)
    }

    /// Looks up an already interned chain without creating anything.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&Namespace> {
        let key: Vec<String> = path.iter().map(|segment| segment.as_ref().to_string()).collect();
        self.chains.get(&key)
    }

    /// The number of distinct segments interned so far.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
