/*!
`contactgraph` stores who-knows-whom relations between phone subscribers and answers the
questions a contact-syncing service asks about them:

- **lookup**: whom does a subscriber list?
- **rlookup**: who lists a subscriber?
- **suggest**: whom might a subscriber know? (contacts of contacts, at most ten)

# Representation

We represent **nodes** as `u64` phone numbers. Identifiers are opaque and sparse: any value is
legal, and a node comes into existence the first time it appears in an edge.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` meaning "source lists target".

Graphs are directed and only grow. Every representation stores both directions so that
reverse lookups cost the same as forward lookups, and every representation deduplicates:
adding an existing edge is a no-op.

### Available Representations

See the [`repr`] module for details:

- [`ArrayGraph`](crate::repr::ArrayGraph): plain adjacency arrays, lookups are borrowed views
- [`SparseArrayGraph`](crate::repr::SparseArrayGraph): inline small vectors for tiny books
- [`BitmapGraph`](crate::repr::BitmapGraph): compressed roaring bitmaps, lookups in ascending order

All of them implement the object-safe [`ContactGraph`](crate::ops::ContactGraph) contract, and
[`Backend`](crate::repr::Backend) selects one at runtime.

# Design

Algorithms and generators are provided as configurable structs that one can alter using the
*Builder* pattern before running them on a graph. The common defaults are additionally
available as traits implemented on the graphs themselves.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, configuration, graph operations and all representations,
- [`algo`] includes the suggestion traversal (`graph.suggestions_of(u)`),
- [`gens`] includes generators for synthetic populations and a driver inserting them with progress logging,
- [`utils`] includes the `Set` abstraction used to track visited identifiers.

In most use-cases, `use contactgraph::{prelude::*, algo::*};` suffices for your needs.

```
use contactgraph::prelude::*;

let mut graph = Backend::Bitmap.build(GraphConfig::new());
graph.add_contact(33_611, 33_622);
graph.add_contact(33_622, 33_633);

assert_eq!(graph.lookup(33_611).to_vec(), vec![33_622]);
assert_eq!(graph.rlookup(33_633).to_vec(), vec![33_622]);
assert_eq!(graph.suggest(33_611), vec![33_633]);
```

# Logging
The crate emits [`tracing`](https://docs.rs/tracing) events but never installs a subscriber.
*/

pub mod algo;
pub mod config;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use error::{Error, Result};

use {config::*, edge::*, node::*};

/// `contactgraph::prelude` includes definitions for nodes, edges and configuration, all graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{config::*, edge::*, node::*, ops::*, repr::*};
}
