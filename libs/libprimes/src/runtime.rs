//! Userspace runtime entry point for freestanding primes binaries.
//!
//! The binary supplies `#[no_mangle] extern "C" fn main(argc, argv) -> i32`;
//! its return value becomes the exit status.

use core::arch::naked_asm;

use crate::argv::get_args_from_stack;
use crate::process::exit;

extern "C" {
    fn main(argc: usize, argv: *const *const u8) -> i32;
}

#[unsafe(naked)]
#[no_mangle]
pub extern "C" fn _start() -> ! {
    naked_asm!(
        "mov rdi, rsp",    // Pass original RSP as first argument
        "and rsp, -16",    // Align stack to 16 bytes (ABI requirement)
        "call {entry}",    // Call runtime_entry(stack_ptr)
        "ud2",             // Should never return
        entry = sym runtime_entry,
    )
}

extern "C" fn runtime_entry(stack_ptr: *const u64) -> ! {
    let args = unsafe { get_args_from_stack(stack_ptr) };
    let exit_code = unsafe { main(args.argc, args.argv_ptr()) };
    exit(exit_code);
}
