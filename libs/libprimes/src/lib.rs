//! Nth-prime userspace library
//!
//! Everything the `primes` programs need, without the standard library:
//!
//! - **Syscall layer**: `io::write` and `process::exit`, the only two
//!   primitives the programs use. Freestanding builds issue `int 0x80`
//!   directly; hosted unix builds go through `libc`.
//! - **Program core**: trial-division search (`prime`), manual decimal
//!   conversion (`decimal`), the fixed-capacity output buffer (`message`)
//!   and the pipeline orchestration (`app`).
//!
//! # Usage
//!
//! ```rust,ignore
//! #![no_std]
//! #![no_main]
//!
//! use libprimes::{app, argv, config::Config, io::stdout, process::exit};
//!
//! #[no_mangle]
//! pub extern "C" fn main(argc: usize, argv_ptr: *const *const u8) -> i32 {
//!     let args = unsafe { argv::Args::new(argc, argv_ptr) };
//!     app::run(&Config::argument("primes"), &args, &mut stdout())
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(not(any(unix, all(target_os = "none", target_arch = "x86_64"))))]
compile_error!("libprimes supports unix hosts and freestanding x86_64 only");

pub use errno::Errno;
pub use error::Error;
pub use types::Fd;

pub mod app;
pub mod argv;
pub mod config;
pub mod decimal;
pub mod errno;
pub mod error;
pub mod io;
pub mod logger;
pub mod message;
pub mod prime;
pub mod process;
#[cfg(all(feature = "runtime", target_os = "none", target_arch = "x86_64"))]
pub mod runtime;
#[cfg(target_os = "none")]
pub mod syscall;
pub mod types;
