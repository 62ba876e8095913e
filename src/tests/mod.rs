mod test_adjacency;
mod test_operators;

use crate::graph::GraphParams;
use crate::operators::WeightKernel;

pub const KNN_PARAMS: GraphParams = GraphParams {
    selection: crate::graph::EdgeSelection::KNearest { k: 3 },
    kernel: WeightKernel::Gaussian { gamma: 0.5 },
};

/// Install a test logger once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
