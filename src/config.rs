use crate::error::ArenaError;

/// Sizing parameters for an arena.
///
/// Capacity and the fixed-block size are deliberate, caller-visible
/// configuration rather than hidden constants. The C surface always uses
/// [`ArenaConfig::default`]; Rust callers can pass their own to
/// [`Arena::with_config`](crate::Arena::with_config).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
  /// Total usable bytes in the backing buffer, fixed at creation.
  pub capacity: usize,

  /// Size in bytes of the fixed "buffer block" allocation shortcut.
  pub block_size: usize,
}

impl ArenaConfig {
  /// Default backing buffer capacity: 1 MiB.
  pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

  /// Default fixed-block size: 4 KiB, one line/record buffer.
  pub const DEFAULT_BLOCK_SIZE: usize = 4096;

  /// Creates a config with the given capacity and the default block size.
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      block_size: Self::DEFAULT_BLOCK_SIZE.min(capacity),
    }
  }

  /// Sets the fixed-block size.
  pub fn with_block_size(
    mut self,
    block_size: usize,
  ) -> Self {
    self.block_size = block_size;
    self
  }

  /// Checks that the config can back a usable arena.
  ///
  /// A fresh arena must always fit at least one fixed block, so
  /// `block_size <= capacity` is required. Zero sizes are rejected.
  pub fn validate(&self) -> Result<(), ArenaError> {
    if self.capacity == 0 || self.block_size == 0 || self.block_size > self.capacity {
      return Err(ArenaError::InvalidConfig {
        capacity: self.capacity,
        block_size: self.block_size,
      });
    }

    Ok(())
  }
}

impl Default for ArenaConfig {
  fn default() -> Self {
    Self {
      capacity: Self::DEFAULT_CAPACITY,
      block_size: Self::DEFAULT_BLOCK_SIZE,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_fits_at_least_one_block() {
    let config = ArenaConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.block_size <= config.capacity);
  }

  #[test]
  fn test_new_clamps_block_size_to_capacity() {
    let config = ArenaConfig::new(1024);
    assert_eq!(config.block_size, 1024);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_rejects_zero_capacity() {
    let config = ArenaConfig {
      capacity: 0,
      block_size: 16,
    };
    assert!(matches!(config.validate(), Err(ArenaError::InvalidConfig { .. })));
  }

  #[test]
  fn test_rejects_block_larger_than_capacity() {
    let config = ArenaConfig::new(1024).with_block_size(2048);
    assert!(matches!(config.validate(), Err(ArenaError::InvalidConfig { .. })));
  }
}
