use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::align::MAX_ALIGN;
use crate::align_up;
use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// A bump allocator over one contiguous backing buffer.
///
/// Allocation advances a cursor; there is no individual free. [`reset`]
/// rewinds the cursor to zero in O(1), reclaiming everything at once
/// without releasing the buffer. Capacity is fixed at creation — when a
/// request does not fit, [`alloc`] fails and the arena is left unchanged.
///
/// An `Arena` is always backed by live memory; the "uninitialized" state
/// of the C lifecycle is modeled as `Option<Arena>` by the instance
/// manager behind the C surface. Dropping the arena releases the buffer
/// and invalidates every pointer it ever returned.
///
/// `Arena` is `Send` but not `Sync`: the safe concurrency pattern is one
/// instance per thread, never a shared one.
///
/// [`alloc`]: Arena::alloc
/// [`reset`]: Arena::reset
pub struct Arena {
  base: NonNull<u8>,
  capacity: usize,
  offset: usize,
  block_size: usize,
}

impl Arena {
  /// Creates an arena with the default config (1 MiB capacity, 4 KiB
  /// fixed blocks).
  pub fn new() -> Self {
    // The default config always validates.
    match Self::with_config(ArenaConfig::default()) {
      Ok(arena) => arena,
      Err(_) => unreachable!("default config is valid"),
    }
  }

  /// Creates an arena backed by a fresh buffer sized per `config`.
  ///
  /// The buffer is aligned to [`MAX_ALIGN`] and its contents are
  /// unspecified. Aborts the process if the backing allocation itself
  /// fails, mirroring `std` collection behavior.
  pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
    config.validate()?;

    let layout = match Layout::from_size_align(config.capacity, MAX_ALIGN) {
      Ok(layout) => layout,
      Err(_) => {
        return Err(ArenaError::InvalidConfig {
          capacity: config.capacity,
          block_size: config.block_size,
        });
      },
    };

    // SAFETY: layout has non-zero size (validate rejects zero capacity).
    let ptr = unsafe { alloc::alloc(layout) };
    let Some(base) = NonNull::new(ptr) else {
      alloc::handle_alloc_error(layout);
    };

    Ok(Self {
      base,
      capacity: config.capacity,
      offset: 0,
      block_size: config.block_size,
    })
  }

  /// Bump-allocates `size` bytes aligned to [`MAX_ALIGN`].
  ///
  /// Returns a pointer into the backing buffer, valid until the next
  /// [`reset`](Arena::reset) or until the arena is dropped. The memory is
  /// not zeroed. On exhaustion the cursor is left unchanged and the arena
  /// remains usable for smaller requests.
  pub fn alloc(
    &mut self,
    size: usize,
  ) -> Result<NonNull<u8>, ArenaError> {
    let aligned = align_up!(self.offset, MAX_ALIGN);
    let remaining = self.capacity.saturating_sub(aligned);

    if size > remaining {
      return Err(ArenaError::OutOfCapacity {
        requested: size,
        remaining,
        capacity: self.capacity,
      });
    }

    self.offset = aligned + size;

    // SAFETY: aligned <= capacity, so the pointer stays within the
    // buffer (or one past the end for a zero-size request), and base is
    // non-null.
    Ok(unsafe { NonNull::new_unchecked(self.base.as_ptr().add(aligned)) })
  }

  /// Bump-allocates one fixed-size buffer block.
  ///
  /// Same algorithm and exhaustion rules as [`alloc`](Arena::alloc) with
  /// `size = block_size`; the caller never has to know the constant.
  pub fn alloc_block(&mut self) -> Result<NonNull<u8>, ArenaError> {
    self.alloc(self.block_size)
  }

  /// Rewinds the cursor to zero, reclaiming every allocation at once.
  ///
  /// The backing buffer is neither cleared nor released, so the first
  /// allocation after a reset reproducibly returns the same address as
  /// the first allocation after creation. Returns the buffer base.
  pub fn reset(&mut self) -> NonNull<u8> {
    self.offset = 0;
    self.base
  }

  /// Base of the backing buffer.
  pub fn base(&self) -> NonNull<u8> {
    self.base
  }

  /// Total capacity in bytes.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Bytes claimed since the last reset, including alignment padding.
  pub fn used(&self) -> usize {
    self.offset
  }

  /// Bytes still free at the current (aligned) cursor.
  pub fn remaining(&self) -> usize {
    self.capacity.saturating_sub(align_up!(self.offset, MAX_ALIGN))
  }

  /// Size in bytes of the fixed buffer block.
  pub fn block_size(&self) -> usize {
    self.block_size
  }
}

impl Default for Arena {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for Arena {
  fn drop(&mut self) {
    // SAFETY: base was allocated in with_config with this exact layout.
    unsafe {
      let layout = Layout::from_size_align_unchecked(self.capacity, MAX_ALIGN);
      alloc::dealloc(self.base.as_ptr(), layout);
    }
  }
}

// SAFETY: Arena exclusively owns its buffer, so moving it to another
// thread is sound. It is deliberately not Sync — the cursor update is
// unsynchronized by contract.
unsafe impl Send for Arena {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_alloc_returns_aligned_pointers() {
    let mut arena = Arena::new();

    for size in [1, 33, 128, 7, 4096] {
      let ptr = arena.alloc(size).unwrap();
      assert_eq!(ptr.as_ptr() as usize % MAX_ALIGN, 0);
    }
  }

  #[test]
  fn test_alloc_is_monotonic_and_non_overlapping() {
    let mut arena = Arena::new();

    let first = arena.alloc(100).unwrap().as_ptr() as usize;
    let second = arena.alloc(200).unwrap().as_ptr() as usize;
    let third = arena.alloc(1).unwrap().as_ptr() as usize;

    assert!(second >= first + 100);
    assert!(third >= second + 200);
  }

  #[test]
  fn test_reset_is_deterministic() {
    let mut arena = Arena::new();

    let before = arena.alloc(256).unwrap();
    arena.alloc(512).unwrap();
    arena.reset();
    let after = arena.alloc(256).unwrap();

    assert_eq!(before, after);
    assert_eq!(before, arena.base());
  }

  #[test]
  fn test_exhaustion_leaves_offset_unchanged() {
    let config = ArenaConfig::new(1024).with_block_size(64);
    let mut arena = Arena::with_config(config).unwrap();

    arena.alloc(100).unwrap();
    let used = arena.used();

    let err = arena.alloc(4096).unwrap_err();
    assert!(matches!(err, ArenaError::OutOfCapacity { requested: 4096, .. }));
    assert_eq!(arena.used(), used);

    // Still usable for requests that fit.
    arena.alloc(64).unwrap();
  }

  #[test]
  fn test_fresh_arena_fits_one_block() {
    let mut arena = Arena::new();
    let ptr = arena.alloc_block().unwrap();

    assert_eq!(ptr, arena.base());
    assert_eq!(arena.used(), arena.block_size());
  }

  #[test]
  fn test_exact_fit_succeeds() {
    let config = ArenaConfig::new(1024).with_block_size(1024);
    let mut arena = Arena::with_config(config).unwrap();

    assert!(arena.alloc_block().is_ok());
    assert!(arena.alloc(1).is_err());
  }

  #[test]
  fn test_zero_size_alloc() {
    let mut arena = Arena::new();

    let ptr = arena.alloc(0).unwrap();
    assert_eq!(ptr, arena.base());
    assert_eq!(arena.used(), 0);
  }

  #[test]
  fn test_allocations_are_writable() {
    let mut arena = Arena::new();

    let ptr = arena.alloc(64).unwrap().as_ptr();
    unsafe {
      ptr.write_bytes(0xAB, 64);
      assert_eq!(ptr.read(), 0xAB);
      assert_eq!(ptr.add(63).read(), 0xAB);
    }
  }

  #[test]
  fn test_remaining_accounts_for_padding() {
    let config = ArenaConfig::new(1024).with_block_size(64);
    let mut arena = Arena::with_config(config).unwrap();

    arena.alloc(1).unwrap();
    assert_eq!(arena.remaining(), 1024 - MAX_ALIGN);
  }

  mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
      #[test]
      fn alignment_holds_for_any_size(sizes in proptest::collection::vec(0usize..512, 1..64)) {
        let mut arena = Arena::new();

        for size in sizes {
          if let Ok(ptr) = arena.alloc(size) {
            prop_assert_eq!(ptr.as_ptr() as usize % MAX_ALIGN, 0);
          }
        }
      }

      #[test]
      fn successful_allocs_never_overlap(sizes in proptest::collection::vec(1usize..512, 2..64)) {
        let mut arena = Arena::new();
        let mut previous_end: Option<usize> = None;

        for size in sizes {
          let Ok(ptr) = arena.alloc(size) else { break };
          let start = ptr.as_ptr() as usize;

          if let Some(end) = previous_end {
            prop_assert!(start >= end);
          }
          previous_end = Some(start + size);
        }
      }

      #[test]
      fn used_never_exceeds_capacity(sizes in proptest::collection::vec(0usize..8192, 1..256)) {
        let config = ArenaConfig::new(16 * 1024).with_block_size(512);
        let mut arena = Arena::with_config(config).unwrap();

        for size in sizes {
          let _ = arena.alloc(size);
          prop_assert!(arena.used() <= arena.capacity());
        }
      }
    }
  }
}
