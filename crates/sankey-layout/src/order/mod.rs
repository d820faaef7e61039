//! Node ordering / crossing minimization.
//!
//! Layers are reordered by weighted-median sweeps against an already fixed neighbour layer;
//! an accumulator-tree crossing counter scores each sweep and the best order seen wins.

mod types;
pub use types::{NO_PREFERENCE, Order, SweepDirection};

mod layer_index;

mod cross_count;
pub use cross_count::{
    count_between_crossings, count_crossings, count_loop_crossings, total_crossings,
};

mod weighted_median;
pub use weighted_median::{median_value, neighbour_positions, sort_by_positions, sort_nodes};

mod init_order;
pub use init_order::{MAX_LAYERS, init_order};

mod ordering;
pub use ordering::{OrderOptions, order_ranked, ordering, ordering_with_options, validate_order};
