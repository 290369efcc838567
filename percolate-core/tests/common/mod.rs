use percolate_core::Lattice;

/// Builds a lattice from ASCII rows where `#` is occupied and `.` is empty.
#[must_use]
pub fn lattice(rows: &[&str]) -> Lattice {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|cell| cell == '#').collect())
        .collect();
    Lattice::from_rows(rows).expect("fixture rows must be square")
}
