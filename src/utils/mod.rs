pub(crate) mod alloc;
pub(crate) use alloc::Alloc;

pub mod black_box;
pub use black_box::black_box;

#[inline(always)]
pub(crate) const unsafe fn slice_to_array<T, const N: usize>(slice: &[T]) -> &[T; N] {
    &*(slice.as_ptr() as *const [T; N])
}

/// Converts a size in bytes to a human-readable string. For benchmarking
pub fn human_readable_size(size: usize) -> String {
    let mut cal_size = size;
    let mut unit = 0;
    while cal_size >= 1024 {
        cal_size >>= 10;
        unit += 1;
    }
    let unit = match unit {
        0 => "B",
        1 => "KiB",
        2 => "MiB",
        3 => "GiB",
        4 => "TiB",
        5 => "PiB",
        6 => "EiB",
        _ => {
            cal_size = size;
            "B"
        },
    };
    format!("{} {}", cal_size, unit)
}

/// Bitwise merge two values using a mask. If the mask bit is set, the
/// corresponding bit in 'b' is used, otherwise the corresponding bit in 'a'
/// is used.
#[inline(always)]
pub fn merge_bits(a: u32, b: u32, mask: u32) -> u32 {
    // the two halves are disjoint, so add and or agree
    (a & !mask).wrapping_add(b & mask)
}
