//! primes1000 - print the 1000th prime
//!
//! Usage: primes1000
//!
//! Takes no input. Arguments, if any, are ignored.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

use libprimes::config::{Config, FIXED_INDEX};
use libprimes::{app, io, logger, process};

const CONFIG: Config = Config::fixed("primes1000", FIXED_INDEX);

#[cfg(target_os = "none")]
#[no_mangle]
pub extern "C" fn main(argc: usize, argv_ptr: *const *const u8) -> i32 {
    let args = unsafe { libprimes::argv::Args::new(argc, argv_ptr) };
    let _ = logger::init(CONFIG.log_level);
    app::run(&CONFIG, &args, &mut io::stdout())
}

#[cfg(not(target_os = "none"))]
fn main() {
    let no_args: [&[u8]; 0] = [];
    let _ = logger::init(CONFIG.log_level);
    process::exit(app::run(&CONFIG, &no_args[..], &mut io::stdout()));
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    let _ = io::stderr().write_str("primes1000: panic!\n");
    process::exit(2);
}
