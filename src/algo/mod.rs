/*!
# Graph Algorithms

Algorithms are provided as configurable structs (set up via the *Builder* pattern before being
run on a graph) and, for the common defaults, as traits implemented on the graphs themselves:
```rust
use contactgraph::{algo::*, prelude::*};

let graph = ArrayGraph::from_edges([Edge(1, 2), Edge(2, 3)]);
assert_eq!(graph.suggestions_of(1), vec![3]);
```
*/

mod suggest;

use crate::{prelude::*, utils::*};

pub use suggest::*;
