//! Integer arithmetic helpers for bucket boundaries and report percentages

/// Boundary `index` of `parts` equal divisions of `[min, max]`
///
/// Computes `min + floor((max - min) * index / parts)` exactly in 128-bit
/// arithmetic, so millisecond ranges of any size never overflow or drift.
/// `index == 0` yields `min` and `index == parts` yields `max`.
///
/// # Examples
/// ```
/// use release_buckets::utils::math::division_boundary;
///
/// assert_eq!(division_boundary(0, 12_235, 0, 10), 0);
/// assert_eq!(division_boundary(0, 12_235, 1, 10), 1_223);
/// assert_eq!(division_boundary(0, 12_235, 10, 10), 12_235);
/// ```
#[inline]
pub fn division_boundary(min: i64, max: i64, index: usize, parts: usize) -> i64 {
    debug_assert!(parts > 0, "parts must be non-zero");
    debug_assert!(index <= parts, "index must not exceed parts");
    debug_assert!(min <= max, "range must not be inverted");
    let span = max as i128 - min as i128;
    let offset = (span * index as i128).div_euclid(parts as i128);
    // index <= parts keeps the result within [min, max]
    (min as i128 + offset) as i64
}

/// Calculate percentage safely for usize values, returning 0.0 if total is zero.
///
/// # Examples
/// ```
/// use release_buckets::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(1, 4), 25.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
