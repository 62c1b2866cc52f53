// src/slice.rs
//! Bulk byte-order swapping over slices.

use bytemuck::Pod;

use crate::swap::Swappable;

/// Reverses the byte order of every element of `data` in place.
///
/// Equivalent to applying [`swap_in_place`](crate::swap_in_place) to each
/// element, but operates on the raw byte view of the slice. A no-op for
/// 1-byte element types.
///
/// # Example
///
/// ```
/// use swapbytes::swap_slice_in_place;
///
/// let mut words = [0x1122u16, 0x3344];
/// swap_slice_in_place(&mut words);
/// assert_eq!(words, [0x2211, 0x4433]);
/// ```
pub fn swap_slice_in_place<T: Swappable + Pod>(data: &mut [T]) {
    let width = std::mem::size_of::<T>();
    if width <= 1 {
        return;
    }

    let bytes: &mut [u8] = bytemuck::cast_slice_mut(data);
    for element in bytes.chunks_exact_mut(width) {
        element.reverse();
    }
}
