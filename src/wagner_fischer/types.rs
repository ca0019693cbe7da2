use thiserror::Error;

/// Alias for a vector of Edit
/// Result of the diff function
pub type Diff<T> = Vec<Edit<T>>;

/// Each element in a diff can be
/// new (Insert)
/// removed (Delete)
/// equal (Equal)
/// changed in place (Replace, old then new)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Insert(T),
    Delete(T),
    Equal(T),
    Replace(T, T),
}

/// Cost of inserting one element of the new sequence.
pub const COST_INSERT: usize = 1;
/// Cost of deleting one element of the old sequence.
pub const COST_DELETE: usize = 1;
/// Cost of replacing an element with a different one.
pub const COST_REPLACE: usize = 1;
/// Cost of keeping an element present on both sides.
pub const COST_EQUAL: usize = 0;

/// Errors surfaced while reconstructing an edit script from a cost table.
///
/// Both variants indicate a defect or a table paired with the wrong
/// sequences, not a condition a caller can provoke through valid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("cost table is {rows}x{cols} but the sequences have lengths {old_len} and {new_len}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        old_len: usize,
        new_len: usize,
    },
    #[error("no edit action accounts for cost table cell ({row}, {col})")]
    InconsistentTable { row: usize, col: usize },
}
