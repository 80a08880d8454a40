/// Alignment index (optical recognition point) for a display unit.
///
/// The eye fixates slightly left of a word's center, and the fixation point
/// grows sub-linearly with word length. A fixed band table approximates that
/// without per-character analysis:
/// - 1 char → index 0
/// - 2-5 chars → index 1
/// - 6-9 chars → index 2
/// - 10-13 chars → index 3
/// - 14+ chars → index 4
pub fn alignment_index(unit: &str) -> usize {
    let len = unit.chars().count();
    let index = match len {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    };
    // The result must stay a valid character position even for the
    // zero-length input that `segment` can never produce.
    index.min(len.saturating_sub(1))
}
