//! Bit-reversal permutation for the iterative radix-2 transform.

/// Reverse the low `log2(n)` bits of `x`.
///
/// `n` must be a power of two and `x < n`. The binary digits of `x` are read
/// from least to most significant, zero-padded to `log2(n)` digits, and
/// reassembled most-significant first.
#[inline]
pub fn reverse_bits(x: usize, n: usize) -> usize {
    debug_assert!(n.is_power_of_two(), "length {n} is not a power of two");
    debug_assert!(x < n, "index {x} out of range for length {n}");
    let bits = n.trailing_zeros();
    let mut rest = x;
    let mut rev = 0usize;
    for _ in 0..bits {
        rev = (rev << 1) | (rest & 1);
        rest >>= 1;
    }
    rev
}

/// Reorder `data` in place so that element `i` moves to `reverse_bits(i, len)`.
///
/// The permutation is an involution, so forward and inverse transforms share it.
pub fn bit_reverse_permute<E>(data: &mut [E]) {
    let n = data.len();
    if n <= 2 {
        return;
    }
    for i in 0..n {
        let j = reverse_bits(i, n);
        if i < j {
            data.swap(i, j);
        }
    }
}
