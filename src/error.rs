use thiserror::Error;

/// Errors reported by the allocation engine.
///
/// The C surface never surfaces these directly: every error becomes a null
/// pointer at the boundary. Rust callers get the structured variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
  /// The request would exceed the arena's fixed capacity. Recoverable;
  /// the arena's offset is left unchanged.
  #[error("arena capacity exceeded: requested {requested} bytes, {remaining} of {capacity} bytes free")]
  OutOfCapacity {
    /// Bytes requested, before alignment padding.
    requested: usize,
    /// Bytes still free at the aligned cursor.
    remaining: usize,
    /// Total capacity of the backing buffer.
    capacity: usize,
  },

  /// An operation other than init was invoked on the uninitialized
  /// singleton.
  #[error("arena is not initialized")]
  NotInitialized,

  /// Rejected configuration: zero sizes, or a fixed block that could
  /// never fit.
  #[error("invalid arena config: capacity {capacity} bytes, block size {block_size} bytes")]
  InvalidConfig {
    /// Requested capacity.
    capacity: usize,
    /// Requested fixed-block size.
    block_size: usize,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_messages() {
    let err = ArenaError::OutOfCapacity {
      requested: 512,
      remaining: 16,
      capacity: 1024,
    };
    assert_eq!(
      err.to_string(),
      "arena capacity exceeded: requested 512 bytes, 16 of 1024 bytes free"
    );

    assert_eq!(ArenaError::NotInitialized.to_string(), "arena is not initialized");
  }
}
