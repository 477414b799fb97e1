/// Defines the cross-partition summation of nodal values
///
/// When the mesh is split across workers, each worker computes partial nodal sums over its own
/// elements and calls `sum` to obtain the totals of the shared nodes. The assembler is unaware
/// of the partitioning; implementations are injected by the driver.
pub trait NodalReduction: Send + Sync {
    /// Replaces the partial nodal sums by the totals over all partitions
    fn sum(&self, values: &mut [f64]);
}

/// Implements the reduction of a single (unpartitioned) mesh; the values are left unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialReduction;

impl NodalReduction for SerialReduction {
    fn sum(&self, _values: &mut [f64]) {}
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
