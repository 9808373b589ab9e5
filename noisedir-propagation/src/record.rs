use getset::{CopyGetters, Getters};

/// Level computed at a receiver point.
#[derive(Debug, Clone, PartialEq, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropagationResultPtRecord {
    #[getset(get_copy = "pub")]
    /// Row of the receiver in the receiver table.
    receiver_record_row: usize,
    #[getset(get_copy = "pub")]
    /// Index of the computation cell.
    cell_id: usize,
    #[getset(get_copy = "pub")]
    /// Sound level at the receiver in \[dB\].
    receiver_level: f64,
}

impl PropagationResultPtRecord {
    /// Creates a new [`PropagationResultPtRecord`].
    #[must_use]
    pub const fn new(receiver_record_row: usize, cell_id: usize, receiver_level: f64) -> Self {
        Self {
            receiver_record_row,
            cell_id,
            receiver_level,
        }
    }
}

/// Levels computed at the vertices of a triangle of the receiver mesh.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropagationResultTriRecord {
    #[getset(get = "pub")]
    /// Indices of the three vertices.
    nodes: [usize; 3],
    #[getset(get = "pub")]
    /// Sound level at each vertex in \[dB\].
    levels: [f64; 3],
    #[getset(get_copy = "pub")]
    /// Index of the triangle.
    triangle_id: usize,
}

impl PropagationResultTriRecord {
    /// Creates a new [`PropagationResultTriRecord`].
    #[must_use]
    pub const fn new(nodes: [usize; 3], levels: [f64; 3], triangle_id: usize) -> Self {
        Self {
            nodes,
            levels,
            triangle_id,
        }
    }
}
