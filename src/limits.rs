//! Compile-time bounds on input size.

/// Maximum byte length of a single CSV field (label or numeric), terminator excluded.
pub const INPUT_MAX: usize = 4096;

/// Maximum number of taxa a [`crate::DistanceMatrix`] may hold.
pub const MAX_TAXA: usize = 4096;

/// Maximum number of nodes (leaves + synthesized internals) a [`crate::Tree`] may hold.
pub const MAX_NODES: usize = 2 * MAX_TAXA - 2;
