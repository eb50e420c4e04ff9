const SEED: i32 = 1;
const MULTIPLIER: i32 = 31;

/// Fold components into the portable polynomial hash, most significant component first.
///
/// Each byte contributes its signed value (`128` counts as `-128`) and the
/// arithmetic wraps on overflow, so values match hashes produced by other
/// implementations of the same version type.
pub(crate) fn hash_components(components: impl IntoIterator<Item = u8>) -> i32 {
    components.into_iter().fold(SEED, |hash, component| {
        hash.wrapping_mul(MULTIPLIER)
            .wrapping_add(i32::from(component as i8))
    })
}
