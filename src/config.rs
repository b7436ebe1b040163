/// Default maze side length.
pub const DEFAULT_SIZE: usize = 21;
/// Smallest supported maze side length.
pub const MIN_SIZE: usize = 5;
/// Largest supported maze side length.
pub const MAX_SIZE: usize = 51;
/// Points awarded for collecting a bonus dot.
pub const BONUS_POINTS: u32 = 10;
/// Generation attempts before `session` escalates to the caller.
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Coerce a requested size to the nearest valid odd value within bounds.
/// Even sizes round up before clamping.
pub fn clamp_size(requested: usize) -> usize {
    let odd = if requested % 2 == 0 {
        requested.saturating_add(1)
    } else {
        requested
    };
    odd.clamp(MIN_SIZE, MAX_SIZE)
}
