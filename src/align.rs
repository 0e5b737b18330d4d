use std::mem;

/// Maximum scalar alignment for the platform.
///
/// Every pointer handed out by the arena is aligned to this, so any
/// plain-old-data object fits in the returned memory without extra
/// caller-side alignment logic. Matches C's `alignof(max_align_t)`,
/// typically 16 bytes.
pub const MAX_ALIGN: usize = mem::align_of::<libc::max_align_t>();

/// Rounds `$value` up to the next multiple of `$align`.
///
/// `$align` must be a power of two.
///
/// # Examples
///
/// ```rust
/// use rarena::align_up;
///
/// assert_eq!(align_up!(0usize, 16), 0);
/// assert_eq!(align_up!(1usize, 16), 16);
/// assert_eq!(align_up!(16usize, 16), 16);
/// assert_eq!(align_up!(17usize, 16), 32);
/// ```
#[macro_export]
macro_rules! align_up {
  ($value:expr, $align:expr) => {
    ($value + ($align - 1)) & !($align - 1)
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_max_align_is_power_of_two() {
    assert!(MAX_ALIGN.is_power_of_two());
    assert!(MAX_ALIGN >= mem::align_of::<u128>());
  }

  #[test]
  fn test_align_up() {
    let mut expectations = Vec::new();

    for i in 0..10 {
      let values = (MAX_ALIGN * i + 1)..=(MAX_ALIGN * (i + 1));

      let expected = MAX_ALIGN * (i + 1);

      expectations.push((values, expected));
    }

    for (values, expected) in expectations {
      for value in values {
        assert_eq!(expected, align_up!(value, MAX_ALIGN));
      }
    }
  }

  #[test]
  fn test_align_up_zero() {
    assert_eq!(0, align_up!(0, MAX_ALIGN));
  }

  #[test]
  fn test_align_up_other_alignments() {
    assert_eq!(8, align_up!(5usize, 8));
    assert_eq!(4096, align_up!(4095usize, 4096));
    assert_eq!(4096, align_up!(4096usize, 4096));
  }
}
