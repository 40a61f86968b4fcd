//! primes - print the Nth prime
//!
//! Usage: primes <n>
//!
//! Prints `The <n>th prime is: <value>` and exits 0. A wrong argument
//! count or a malformed <n> prints a one-line error and exits 1.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

use libprimes::config::Config;
use libprimes::{app, io, logger, process};

const CONFIG: Config = Config::argument("primes");

#[cfg(target_os = "none")]
#[no_mangle]
pub extern "C" fn main(argc: usize, argv_ptr: *const *const u8) -> i32 {
    let args = unsafe { libprimes::argv::Args::new(argc, argv_ptr) };
    let _ = logger::init(CONFIG.log_level);
    app::run(&CONFIG, &args, &mut io::stdout())
}

#[cfg(not(target_os = "none"))]
fn main() {
    use std::os::unix::ffi::OsStringExt;

    let owned: Vec<Vec<u8>> = std::env::args_os().map(OsStringExt::into_vec).collect();
    let args: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
    let _ = logger::init(CONFIG.log_level);
    process::exit(app::run(&CONFIG, &args[..], &mut io::stdout()));
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    let _ = io::stderr().write_str("primes: panic!\n");
    process::exit(2);
}
