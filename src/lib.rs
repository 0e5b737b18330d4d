//! # rarena - A Linear Arena Allocator with a C-Callable Surface
//!
//! This crate provides a **bump allocator** over one fixed-size contiguous
//! buffer, built to replace high-frequency, short-lived `malloc`/`free`
//! pairs in hot paths: O(1) allocation, O(1) bulk reclamation, no
//! individual free.
//!
//! ## Overview
//!
//! ```text
//!   Arena Concept:
//!
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                      BACKING BUFFER (fixed)                      │
//!   │                                                                  │
//!   │   ┌─────┬─────┬─────┬─────┬───────────────────────────────────┐  │
//!   │   │ A1  │ A2  │ A3  │ A4  │           Free Space              │  │
//!   │   └─────┴─────┴─────┴─────┴───────────────────────────────────┘  │
//!   │   ▲                       ▲                                   ▲  │
//!   │   │                       │                                   │  │
//!   │  base                   offset                            capacity│
//!   │   │                  (next alloc)                              │  │
//!   │   └──── reset() rewinds offset here, reclaiming everything ────┘  │
//!   │                                                                  │
//!   └──────────────────────────────────────────────────────────────────┘
//!
//!   Each allocation bumps offset forward (aligned to MAX_ALIGN).
//!   When a request does not fit, the allocation fails with null —
//!   the arena never grows and never moves prior allocations.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rarena
//!   ├── align      - MAX_ALIGN constant and align_up! macro
//!   ├── config     - ArenaConfig (capacity, fixed-block size)
//!   ├── error      - ArenaError
//!   ├── arena      - Arena, the allocation engine
//!   └── ffi        - C surface: singleton + caller-owned instances
//! ```
//!
//! ## Quick Start (Rust)
//!
//! ```rust
//! use rarena::Arena;
//!
//! let mut arena = Arena::new();
//!
//! let first = arena.alloc(128).unwrap();
//! let second = arena.alloc(33).unwrap();
//! assert_ne!(first, second);
//!
//! // Reclaim everything at once; the next allocation reuses the
//! // same address the first one got.
//! arena.reset();
//! assert_eq!(arena.alloc(128).unwrap(), first);
//! ```
//!
//! ## Quick Start (C)
//!
//! ```c
//! arena_init();                        /* process-wide singleton   */
//! char *buf = arena_alloc(128);        /* null on exhaustion       */
//! char *rec = arena_alloc_block();     /* fixed-size record buffer */
//! arena_reset();                       /* O(1) bulk reclaim        */
//! arena_destroy();
//!
//! ArenaHandle *local = arena_local_init();   /* one per thread/task */
//! char *p = arena_local_alloc(local, 64);
//! arena_local_destroy(local);
//! ```
//!
//! ## Two Access Patterns
//!
//! The same engine backs a process-wide **singleton** (implicit handle,
//! explicit `arena_init`/`arena_destroy` lifecycle, re-initializable any
//! number of times) and caller-owned **local instances** (opaque handles,
//! one per thread or per task). The two never alias: operations on the
//! singleton cannot affect instances and vice versa.
//!
//! ## Limitations
//!
//! - **No individual free**: only `reset` (reclaim all) and destroy.
//! - **Fixed capacity**: exhaustion returns null; retry-after-reset is
//!   caller policy.
//! - **No internal synchronization of allocations**: share nothing —
//!   confine the singleton to one thread, or give each thread a local
//!   instance.
//! - **Raw-handle misuse is UB**: double destroy or use-after-destroy of
//!   a local handle is not guarded against.
//!
//! ## Safety
//!
//! The Rust API is safe; pointers returned by `alloc` are raw views into
//! the arena's buffer and are invalidated en masse by `reset` and by
//! destruction. The C surface inherits the usual FFI caller obligations.

pub mod align;
pub mod config;
pub mod error;

mod arena;
mod ffi;

pub use align::MAX_ALIGN;
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use ffi::{
  ArenaHandle, arena_alloc, arena_alloc_block, arena_destroy, arena_init, arena_is_initialized,
  arena_local_alloc, arena_local_alloc_block, arena_local_destroy, arena_local_init,
  arena_local_is_initialized, arena_local_reset, arena_reset,
};
