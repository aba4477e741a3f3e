//! Planar coordinates and straight-line distance.

/// Anything with planar coordinates.
pub trait Located {
    /// X-coordinate.
    fn x(&self) -> f64;

    /// Y-coordinate.
    fn y(&self) -> f64;
}

/// Euclidean distance `sqrt((x1-x2)^2 + (y1-y2)^2)`.
///
/// # Examples
///
/// ```
/// use u_mdvrp::distance::euclidean_distance;
/// use u_mdvrp::models::{Customer, Depot};
///
/// let c = Customer::new(1, 3.0, 4.0, 1.0);
/// let d = Depot::new(51, 0.0, 0.0, 80.0);
/// assert!((euclidean_distance(&c, &d) - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean_distance<A: Located + ?Sized, B: Located + ?Sized>(a: &A, b: &B) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Index of the candidate closest to `from`.
///
/// Ties go to the first candidate encountered. Returns `None` if
/// `candidates` is empty.
pub fn nearest<A, B>(from: &A, candidates: &[B]) -> Option<usize>
where
    A: Located + ?Sized,
    B: Located,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        let d = euclidean_distance(from, candidate);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
