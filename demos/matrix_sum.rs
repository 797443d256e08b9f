//! Reads a titled matrix from stdin and prints its row and column sums.
//!
//! Run with: printf '2 3\nsample\n1 2 3\n4 5 6\n' | cargo run --example matrix_sum

use linescan::{Reader, TypeRequest};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // The shared stdin reader for the header
    let (rows, cols): (usize, usize) = linescan::scan()?;
    let title = linescan::readline()?;

    let shape = TypeRequest::repeat(TypeRequest::repeat(TypeRequest::Integer, cols), rows);
    let matrix: Vec<Vec<i64>> = linescan::read(std::slice::from_ref(&shape))
        .and_then(linescan::from_value)?;

    println!("{} ({}x{})", title, rows, cols);
    for (i, row) in matrix.iter().enumerate() {
        println!("  row {}: {}", i, row.iter().sum::<i64>());
    }
    let column_sums: Vec<i64> = (0..cols)
        .map(|j| matrix.iter().map(|row| row[j]).sum())
        .collect();
    println!("  columns: {:?}", column_sums);

    // Anything after the matrix, through a locally owned reader
    let mut rest = Reader::new(io::stdin().lock());
    let trailer = rest.readline()?;
    if !trailer.is_empty() {
        println!("trailer: {}", trailer);
    }

    Ok(())
}
