//! Bidirectional mapping between IPv4 addresses and dense vertex ids.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::net::Ipv4Addr;

/// Assigns dense ids to addresses in first-seen order.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use ipmst_providers_csv::VertexRegistry;
///
/// let mut registry = VertexRegistry::new();
/// let a = registry.intern(Ipv4Addr::new(10, 0, 0, 1));
/// let b = registry.intern(Ipv4Addr::new(10, 0, 0, 2));
/// assert_eq!((a, b), (0, 1));
/// assert_eq!(registry.intern(Ipv4Addr::new(10, 0, 0, 1)), 0);
/// assert_eq!(registry.address_of(1), Some(Ipv4Addr::new(10, 0, 0, 2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexRegistry {
    ids: HashMap<Ipv4Addr, usize>,
    addresses: Vec<Ipv4Addr>,
}

impl VertexRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` addresses.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
            addresses: Vec::with_capacity(capacity),
        }
    }

    /// Returns the id of `address`, assigning the next free id if unseen.
    pub fn intern(&mut self, address: Ipv4Addr) -> usize {
        match self.ids.entry(address) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = self.addresses.len();
                self.addresses.push(address);
                *entry.insert(id)
            }
        }
    }

    /// Returns the id previously assigned to `address`.
    #[must_use]
    pub fn id_of(&self, address: Ipv4Addr) -> Option<usize> {
        self.ids.get(&address).copied()
    }

    /// Returns the address assigned `id`.
    #[must_use]
    pub fn address_of(&self, id: usize) -> Option<Ipv4Addr> {
        self.addresses.get(id).copied()
    }

    /// Number of distinct addresses.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.addresses.len() }

    /// Returns `true` when no address has been interned.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.addresses.is_empty() }

    /// Iterates `(id, address)` pairs in id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, Ipv4Addr)> + '_ {
        self.addresses.iter().copied().enumerate()
    }
}
