/// Whether `original` reads as the traditional variant.
///
/// Counts positions where `original` agrees with each variant (zipped up to
/// the shorter length) and favours traditional on a tie.
#[must_use]
pub fn is_traditional(original: &str, traditional: &str, simplified: &str) -> bool {
    let agreement = |variant: &str| {
        original
            .chars()
            .zip(variant.chars())
            .filter(|(a, b)| a == b)
            .count()
    };
    agreement(traditional) >= agreement(simplified)
}
