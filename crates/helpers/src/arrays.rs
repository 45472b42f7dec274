//! Ordered-sequence equality.

/// Returns true iff both sequences have equal length and equal elements at
/// every index.
///
/// Elements are compared with `PartialEq`, elementwise only: for element
/// types that are themselves containers, equality is whatever the element's
/// `PartialEq` does, not a guaranteed deep-structural comparison.
pub fn sequences_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if a[i] != b[i] {
            return false;
        }
    }
    true
}
