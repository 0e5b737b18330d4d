//! C-callable surface: the process-wide singleton arena and caller-owned
//! local instances.
//!
//! Both variants delegate to the same [`Arena`] engine. Every anticipated
//! failure (exhaustion, uninitialized singleton, null handle) is reported
//! as a null pointer; nothing here aborts the process.
//!
//! The singleton lives behind a `Mutex` so the process-wide state is sound
//! to touch from any thread, but the engine itself stays unsynchronized:
//! for hot paths, confine the singleton to one thread or give each thread
//! its own local instance.

use std::ptr::{self, NonNull};
use std::sync::{Mutex, MutexGuard, PoisonError};

use libc::{c_int, c_void, size_t};

use crate::arena::Arena;
use crate::error::ArenaError;

/// An opaque, caller-owned arena instance.
///
/// Returned by [`arena_local_init`] and passed back on every local call.
/// The handle owns its backing buffer exclusively; destroying it twice or
/// using it after destroy is undefined behavior, by design — the happy
/// path carries no liveness checks beyond a null test.
pub struct ArenaHandle {
  arena: Arena,
}

static GLOBAL: Mutex<Option<Arena>> = Mutex::new(None);

/// Locks the singleton slot, recovering from poison.
///
/// No panic can leave the slot half-updated (the engine never panics
/// between state changes), so a poisoned lock is still consistent.
fn global() -> MutexGuard<'static, Option<Arena>> {
  GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Delegates an engine operation to the singleton, failing with
/// [`ArenaError::NotInitialized`] when there is none.
fn with_singleton<F>(op: F) -> Result<NonNull<u8>, ArenaError>
where
  F: FnOnce(&mut Arena) -> Result<NonNull<u8>, ArenaError>,
{
  let mut slot = global();
  let arena = slot.as_mut().ok_or(ArenaError::NotInitialized)?;
  op(arena)
}

/// Converts an engine result into the C surface's null-signaling pointer.
fn to_c_ptr(result: Result<NonNull<u8>, ArenaError>) -> *mut c_void {
  match result {
    Ok(ptr) => ptr.as_ptr().cast(),
    Err(_) => ptr::null_mut(),
  }
}

/// Null-checked mutable access to a local handle, for functions that
/// return pointers.
macro_rules! handle_mut {
  ($ptr:expr) => {{
    // SAFETY: caller guarantees the handle came from arena_local_init and
    // has not been destroyed. Null is tolerated and reported.
    match unsafe { $ptr.as_mut() } {
      Some(handle) => handle,
      None => return ptr::null_mut(),
    }
  }};
}

// =========
// singleton
// =========

/// Initializes the process-wide arena with the default config.
///
/// Any previously initialized singleton is destroyed first — its backing
/// memory is released and every pointer it returned becomes invalid.
/// Returns the base of the new backing buffer.
#[unsafe(no_mangle)]
pub extern "C" fn arena_init() -> *mut c_void {
  let mut slot = global();

  // Release the prior buffer before the replacement is created.
  slot.take();

  let arena = Arena::new();
  let base = arena.base().as_ptr().cast::<c_void>();
  *slot = Some(arena);

  base
}

/// Destroys the process-wide arena, releasing its backing memory.
///
/// Safe no-op when the singleton is uninitialized.
#[unsafe(no_mangle)]
pub extern "C" fn arena_destroy() {
  global().take();
}

/// Rewinds the process-wide arena to offset zero.
///
/// Returns the backing buffer base, or null if the singleton is
/// uninitialized. The buffer is neither cleared nor released.
#[unsafe(no_mangle)]
pub extern "C" fn arena_reset() -> *mut c_void {
  to_c_ptr(with_singleton(|arena| Ok(arena.reset())))
}

/// Allocates `size` bytes from the process-wide arena.
///
/// The returned pointer is aligned to the platform's maximum scalar
/// alignment and points to unspecified contents. Returns null on
/// exhaustion or when the singleton is uninitialized; the arena state is
/// unchanged in either case.
#[unsafe(no_mangle)]
pub extern "C" fn arena_alloc(size: size_t) -> *mut c_void {
  to_c_ptr(with_singleton(|arena| arena.alloc(size)))
}

/// Allocates one fixed-size buffer block from the process-wide arena.
///
/// Same rules as [`arena_alloc`] with the configured block size.
#[unsafe(no_mangle)]
pub extern "C" fn arena_alloc_block() -> *mut c_void {
  to_c_ptr(with_singleton(Arena::alloc_block))
}

/// Reports whether the process-wide arena is initialized. Never fails.
#[unsafe(no_mangle)]
pub extern "C" fn arena_is_initialized() -> c_int {
  global().is_some() as c_int
}

// =====
// local
// =====

/// Creates an independent caller-owned arena with the default config.
///
/// Each call produces a new instance with its own backing buffer; no
/// handle aliases another's memory or the singleton's. The handle must be
/// released with [`arena_local_destroy`].
#[unsafe(no_mangle)]
pub extern "C" fn arena_local_init() -> *mut ArenaHandle {
  Box::into_raw(Box::new(ArenaHandle { arena: Arena::new() }))
}

/// Destroys a caller-owned arena, releasing its backing buffer and
/// bookkeeping state.
///
/// The handle is invalid afterwards and must not be passed to any further
/// call. Null is tolerated; destroying the same handle twice is undefined
/// behavior.
#[unsafe(no_mangle)]
pub extern "C" fn arena_local_destroy(handle: *mut ArenaHandle) {
  if handle.is_null() {
    return;
  }

  // SAFETY: caller guarantees the handle came from arena_local_init and
  // is destroyed exactly once.
  drop(unsafe { Box::from_raw(handle) });
}

/// Rewinds a caller-owned arena to offset zero.
///
/// Returns the backing buffer base, or null for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn arena_local_reset(handle: *mut ArenaHandle) -> *mut c_void {
  let handle = handle_mut!(handle);
  handle.arena.reset().as_ptr().cast()
}

/// Allocates `size` bytes from a caller-owned arena.
///
/// Same contract as [`arena_alloc`], scoped to the referenced instance.
#[unsafe(no_mangle)]
pub extern "C" fn arena_local_alloc(
  handle: *mut ArenaHandle,
  size: size_t,
) -> *mut c_void {
  let handle = handle_mut!(handle);
  to_c_ptr(handle.arena.alloc(size))
}

/// Allocates one fixed-size buffer block from a caller-owned arena.
#[unsafe(no_mangle)]
pub extern "C" fn arena_local_alloc_block(handle: *mut ArenaHandle) -> *mut c_void {
  let handle = handle_mut!(handle);
  to_c_ptr(handle.arena.alloc_block())
}

/// Reports whether a caller-owned handle refers to a live arena.
///
/// A non-null handle is live by contract (there is no tombstone state),
/// so this is 1 for any valid handle and 0 for null.
#[unsafe(no_mangle)]
pub extern "C" fn arena_local_is_initialized(handle: *const ArenaHandle) -> c_int {
  (!handle.is_null()) as c_int
}
