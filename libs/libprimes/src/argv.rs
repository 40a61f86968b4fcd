//! Command-line argument access
//!
//! At process startup on a freestanding target the stack layout is:
//! ```text
//! High addresses:
//!   argv strings (null-terminated)
//!   ...
//!   NULL (end of argv)
//!   argv[n-1] pointer
//!   ...
//!   argv[0] pointer
//!   argc              <- RSP points here at _start
//! Low addresses:
//! ```
//!
//! `Args` reads that layout. Hosted builds collect their arguments into a
//! slice of byte slices instead; both implement [`ArgSource`], which is all
//! `app::run` sees.

/// Indexed access to the program's arguments, `argv[0]` included.
pub trait ArgSource {
    /// Number of arguments (argc)
    fn count(&self) -> usize;

    /// Argument `n` without its NUL terminator, or None if out of bounds
    fn get(&self, n: usize) -> Option<&[u8]>;
}

impl<'a> ArgSource for [&'a [u8]] {
    fn count(&self) -> usize {
        self.len()
    }

    fn get(&self, n: usize) -> Option<&[u8]> {
        <[&[u8]]>::get(self, n).copied()
    }
}

/// Longest argument `Args::argv` will scan for a terminator.
const MAX_ARG_LEN: usize = 4096;

/// Represents the command-line arguments passed to the program.
#[derive(Debug, Clone, Copy)]
pub struct Args {
    /// Number of arguments (argc)
    pub argc: usize,
    /// Pointer to the argv array (array of pointers to null-terminated strings)
    argv_ptr: *const *const u8,
}

impl Args {
    /// Create a new Args from argc and argv pointer
    ///
    /// # Safety
    /// The argv_ptr must point to a valid argv array with at least `argc` entries
    /// followed by a NULL pointer, and the strings must outlive the process.
    pub const unsafe fn new(argc: usize, argv_ptr: *const *const u8) -> Self {
        Self { argc, argv_ptr }
    }

    /// The raw argv array, as handed to a C-style `main`
    pub const fn argv_ptr(&self) -> *const *const u8 {
        self.argv_ptr
    }

    /// Get a pointer to argument at index `n`
    ///
    /// Returns NULL if index is out of bounds.
    pub fn argv_raw(&self, n: usize) -> *const u8 {
        if n >= self.argc {
            return core::ptr::null();
        }
        unsafe { *self.argv_ptr.add(n) }
    }

    /// Get argument at index `n` as a byte slice (without null terminator)
    ///
    /// Returns None if index is out of bounds or the string is unterminated
    /// within `MAX_ARG_LEN` bytes.
    pub fn argv(&self, n: usize) -> Option<&'static [u8]> {
        let ptr = self.argv_raw(n);
        if ptr.is_null() {
            return None;
        }

        let mut len = 0;
        unsafe {
            while *ptr.add(len) != 0 {
                len += 1;
                if len > MAX_ARG_LEN {
                    return None;
                }
            }
            Some(core::slice::from_raw_parts(ptr, len))
        }
    }
}

impl ArgSource for Args {
    fn count(&self) -> usize {
        self.argc
    }

    fn get(&self, n: usize) -> Option<&[u8]> {
        self.argv(n)
    }
}

/// Get command-line arguments from a specific stack pointer.
///
/// # Safety
///
/// The `stack_ptr` must point to a valid argc/argv structure.
pub unsafe fn get_args_from_stack(stack_ptr: *const u64) -> Args {
    let argc = *stack_ptr as usize;
    let argv_ptr = stack_ptr.add(1) as *const *const u8;
    Args::new(argc, argv_ptr)
}
