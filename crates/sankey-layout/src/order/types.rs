/// Layers top to bottom, each listing node ids left to right.
pub type Order = Vec<Vec<String>>;

/// Median of a node without neighbours in the reference layer; such nodes keep their slot.
pub const NO_PREFERENCE: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Top to bottom; each layer is sorted against the layer above it.
    Forward,
    /// Bottom to top; each layer is sorted against the layer below it.
    Backward,
}

impl SweepDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}
