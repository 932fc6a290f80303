//! Parsing user-typed coordinates.

use crate::core::{Coord, LifeError};

/// Parse whitespace-separated `row,col` pairs.
///
/// Only syntax is checked here. Whether the coordinates fit the grid is
/// decided by `Simulator::load_points`.
///
/// ```
/// use rust_life::core::Coord;
/// use rust_life::shell::parse_points;
///
/// let points = parse_points("0,1 1,2  2,0").unwrap();
/// assert_eq!(points, vec![Coord::new(0, 1), Coord::new(1, 2), Coord::new(2, 0)]);
///
/// assert!(parse_points("3;4").is_err());
/// ```
pub fn parse_points(input: &str) -> Result<Vec<Coord>, LifeError> {
    input.split_whitespace().map(parse_point).collect()
}

/// Parse a single `row,col` pair.
pub fn parse_point(token: &str) -> Result<Coord, LifeError> {
    let (row, col) = token
        .split_once(',')
        .ok_or_else(|| LifeError::parse(token))?;

    let row = row.trim().parse().map_err(|_| LifeError::parse(token))?;
    let col = col.trim().parse().map_err(|_| LifeError::parse(token))?;

    Ok(Coord::new(row, col))
}
