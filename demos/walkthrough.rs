use std::io::Read;

use rarena::{
  ArenaConfig, MAX_ALIGN, arena_alloc, arena_alloc_block, arena_destroy, arena_init,
  arena_is_initialized, arena_local_alloc, arena_local_destroy, arena_local_init,
  arena_local_reset, arena_reset,
};

/// Waits until the user presses ENTER.
/// Useful when you want to inspect the process with tools like `pmap`,
/// `htop`, or `gdb` between steps.
fn block_until_enter_pressed() {
  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

fn print_alloc(
  label: &str,
  size: usize,
  addr: *mut std::ffi::c_void,
) {
  println!(
    "[{}] {} bytes at {:?}, addr % MAX_ALIGN = {}",
    label,
    size,
    addr,
    addr as usize % MAX_ALIGN,
  );
}

fn main() {
  // --------------------------------------------------------------------
  // 1) Initialize the process-wide singleton.
  //    The arena owns one fixed 1 MiB buffer; allocation just bumps a
  //    cursor through it.
  // --------------------------------------------------------------------
  let base = arena_init();
  println!("[1] Singleton initialized, base = {:?}", base);
  println!("[1] arena_is_initialized() = {}", arena_is_initialized());

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 2) A few odd-sized allocations. Every pointer comes back aligned to
  //    the platform's maximum scalar alignment, so padding appears
  //    between them.
  // --------------------------------------------------------------------
  let one = arena_alloc(1);
  let odd = arena_alloc(33);
  let chunk = arena_alloc(128);
  print_alloc("2", 1, one);
  print_alloc("2", 33, odd);
  print_alloc("2", 128, chunk);

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 3) The fixed-block shortcut: a record buffer of a configured size,
  //    no constant needed at the call site.
  // --------------------------------------------------------------------
  let block = arena_alloc_block();
  print_alloc("3", ArenaConfig::DEFAULT_BLOCK_SIZE, block);

  // Write through it to show it's usable memory.
  unsafe {
    block.cast::<u8>().write_bytes(0xAB, ArenaConfig::DEFAULT_BLOCK_SIZE);
  }
  println!("[3] Filled the block with 0xAB");

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 4) Reset: O(1) bulk reclaim. The next allocation lands exactly where
  //    the first one did — the defining bump-allocator property.
  // --------------------------------------------------------------------
  let first = arena_alloc(256);
  arena_reset();
  let again = arena_alloc(256);
  println!(
    "[4] 256 bytes before reset = {:?}, after reset = {:?}, equal? {}",
    first,
    again,
    first == again,
  );

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 5) Exhaustion: a request larger than the remaining capacity returns
  //    null and leaves the arena untouched. No growth, no abort.
  // --------------------------------------------------------------------
  let too_big = arena_alloc(ArenaConfig::DEFAULT_CAPACITY + 1);
  println!("[5] Oversized request returned {:?} (null = exhausted)", too_big);
  println!("[5] Small request still works: {:?}", arena_alloc(16));

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 6) Local instances: independent arenas behind opaque handles, one
  //    per thread or per task. They never alias the singleton.
  // --------------------------------------------------------------------
  let local = arena_local_init();
  let local_ptr = arena_local_alloc(local, 64);
  print_alloc("6", 64, local_ptr);

  arena_local_reset(local);
  println!(
    "[6] Local reset, realloc = {:?} (same address again)",
    arena_local_alloc(local, 64),
  );

  arena_local_destroy(local);
  println!("[6] Local instance destroyed; singleton untouched: {}", arena_is_initialized());

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 7) Teardown. Every pointer handed out above is now invalid.
  // --------------------------------------------------------------------
  arena_destroy();
  println!("[7] Singleton destroyed, arena_is_initialized() = {}", arena_is_initialized());
}
