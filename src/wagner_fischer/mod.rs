pub mod types;
pub use types::*;

/// Grid of minimum edit costs between prefixes of two sequences.
///
/// Cell `(i, j)` holds the minimum number of edits turning the first
/// `i` elements of the old sequence into the first `j` elements of the
/// new one. Built once by [`CostTable::build`] and read-only afterwards.
pub struct CostTable {
    data: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl CostTable {
    /// Fills the table for `old` and `new` with the classic
    /// edit-distance recurrence. Row 0 and column 0 are the pure
    /// insertion / pure deletion base cases and are filled before any
    /// interior cell depends on them.
    pub fn build<T: Eq>(old: &[T], new: &[T]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut table = CostTable {
            data: vec![0; rows * cols],
            rows,
            cols,
        };

        for j in 1..cols {
            let cost = table.get(0, j - 1) + COST_INSERT;
            table.set(0, j, cost);
        }

        for i in 1..rows {
            let cost = table.get(i - 1, 0) + COST_DELETE;
            table.set(i, 0, cost);

            for j in 1..cols {
                let replace = if old[i - 1] == new[j - 1] {
                    COST_EQUAL
                } else {
                    COST_REPLACE
                };
                let cost = (table.get(i - 1, j) + COST_DELETE)
                    .min(table.get(i, j - 1) + COST_INSERT)
                    .min(table.get(i - 1, j - 1) + replace);
                table.set(i, j, cost);
            }
        }

        table
    }

    /// Minimum number of edits between the two sequences the table was
    /// built from, i.e. the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, val: usize) {
        self.data[i * self.cols + j] = val;
    }
}

/// Computes the diff between two strings after breaking them into newlines
/// and running `diff`.
pub fn diff_lines(old: &str, new: &str) -> Result<Diff<String>, DiffError> {
    let old_lines: Vec<String> = old.split('\n').map(ToString::to_string).collect();
    let new_lines: Vec<String> = new.split('\n').map(ToString::to_string).collect();
    diff(&old_lines, &new_lines)
}

/// Computes the minimum number of edits between two sequences without
/// reconstructing a script.
pub fn distance<T: Eq>(old: &[T], new: &[T]) -> usize {
    CostTable::build(old, new).distance()
}

/// Computes a minimal edit script between two sequences using the
/// edit-distance table.
///
/// # Examples
///
/// ```
/// use backstitch::wagner_fischer::{diff, Edit};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let result = diff(&old, &new).unwrap();
/// assert_eq!(result, vec![
///     Edit::Equal(1),
///     Edit::Delete(2),
///     Edit::Equal(3),
///     Edit::Insert(4),
/// ]);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> Result<Diff<T>, DiffError> {
    let table = CostTable::build(old, new);
    script(&table, old, new)
}

/// Recovers one minimal edit script from a filled cost table.
///
/// The walk starts at the bottom-right cell and re-derives which action
/// produced each cell from the three candidate costs. When several
/// actions explain the same minimum, deletions win over insertions,
/// insertions over equal elements, and equal elements over
/// replacements; this fixed precedence keeps the output deterministic.
///
/// Fails with [`DiffError::ShapeMismatch`] if the table was not built
/// for sequences of these lengths, and [`DiffError::InconsistentTable`]
/// if some cell's value cannot be explained by any action.
pub fn script<T: Eq + Clone>(
    table: &CostTable,
    old: &[T],
    new: &[T],
) -> Result<Diff<T>, DiffError> {
    if table.rows != old.len() + 1 || table.cols != new.len() + 1 {
        return Err(DiffError::ShapeMismatch {
            rows: table.rows,
            cols: table.cols,
            old_len: old.len(),
            new_len: new.len(),
        });
    }

    let mut edits: Diff<T> = Vec::new();
    let mut i = old.len();
    let mut j = new.len();

    // Candidates touching row -1 or column -1 are guarded out, so at
    // the grid edges only the single valid action is ever considered.
    while i > 0 || j > 0 {
        let cell = table.get(i, j);
        if i > 0 && table.get(i - 1, j) + COST_DELETE == cell {
            i -= 1;
            edits.push(Edit::Delete(old[i].clone()));
        } else if j > 0 && table.get(i, j - 1) + COST_INSERT == cell {
            j -= 1;
            edits.push(Edit::Insert(new[j].clone()));
        } else if i > 0
            && j > 0
            && old[i - 1] == new[j - 1]
            && table.get(i - 1, j - 1) + COST_EQUAL == cell
        {
            i -= 1;
            j -= 1;
            edits.push(Edit::Equal(old[i].clone()));
        } else if i > 0 && j > 0 && table.get(i - 1, j - 1) + COST_REPLACE == cell {
            i -= 1;
            j -= 1;
            edits.push(Edit::Replace(old[i].clone(), new[j].clone()));
        } else {
            return Err(DiffError::InconsistentTable { row: i, col: j });
        }
    }

    edits.reverse();
    Ok(edits)
}
