/*!
# Node Representation

A node is a subscriber, identified by its phone number.
Phone numbers are opaque `u64` values: no validation happens and every value (including `0`) is legal.

Internally, each graph stores its nodes in an arena and addresses them by a dense [`NodeIdx`].
The identifier-to-slot mapping is the only place where raw phone numbers are hashed.
*/

/// Identifiers can be any `u64`
pub type Node = u64;

/// Slot of a node inside the arena of a graph.
/// We limit the number of distinct nodes to `2^32 - 1` which saves space in the index map.
pub type NodeIdx = u32;

/// There can be at most `2^32 - 1` distinct nodes in a graph!
pub type NumNodes = NodeIdx;

/// Number of contacts in a single contact book
pub type NumContacts = u32;

/// Number of (distinct) directed edges of a graph
pub type NumEdges = u64;
