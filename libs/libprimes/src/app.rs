//! The primes pipeline: acquire the index, search, render, emit.
//!
//! `run` prints exactly one line, either the result or the error text, and
//! returns the exit status. Terminating the process is left to the caller.

use log::{debug, warn};

use crate::argv::ArgSource;
use crate::config::{Config, IndexSource, MESSAGE_CAPACITY};
use crate::decimal::{self, RENDER_CAPACITY};
use crate::error::Error;
use crate::io::Console;
use crate::message::MessageBuffer;
use crate::prime;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

type Message = MessageBuffer<MESSAGE_CAPACITY>;

/// Run the program against `args` and print its line to `console`.
pub fn run<A, C>(config: &Config, args: &A, console: &mut C) -> i32
where
    A: ArgSource + ?Sized,
    C: Console + ?Sized,
{
    let mut message = Message::new();
    let printed = match compose(config, args, &mut message) {
        Ok(()) => console.print(message.as_bytes()).map(|()| EXIT_SUCCESS),
        Err(error) => {
            warn!("{}: {}", config.program, error);
            report(config, error, console).map(|()| EXIT_FAILURE)
        }
    };

    match printed {
        Ok(status) => status,
        Err(error) => {
            warn!("{}: could not print: {}", config.program, error);
            EXIT_FAILURE
        }
    }
}

/// Build `The <n>th prime is: <value>\n` into `message`.
///
/// The index text is echoed exactly as given, leading zeros included.
fn compose<A>(config: &Config, args: &A, message: &mut Message) -> Result<(), Error>
where
    A: ArgSource + ?Sized,
{
    let mut index_digits = [0u8; RENDER_CAPACITY];
    let (index_text, n) = match config.index {
        IndexSource::Argument => {
            if args.count() != 2 {
                debug!("expected 1 argument, got {}", args.count().saturating_sub(1));
                return Err(Error::Usage);
            }
            let text = args.get(1).ok_or(Error::Usage)?;
            debug!(
                "index argument {:?}",
                core::str::from_utf8(text).unwrap_or("<non-utf8>")
            );
            (text, decimal::parse(text)?)
        }
        IndexSource::Fixed(n) => (decimal::render(n, &mut index_digits), n),
    };

    let value = prime::nth_prime(n)?;

    let mut value_digits = [0u8; RENDER_CAPACITY];
    message.push_str("The ")?;
    message.push(index_text)?;
    message.push_str("th prime is: ")?;
    message.push(decimal::render(value, &mut value_digits))?;
    message.push_str("\n")?;
    Ok(())
}

/// Print the line for `error`. Usage names the configured program.
fn report<C>(config: &Config, error: Error, console: &mut C) -> Result<(), Error>
where
    C: Console + ?Sized,
{
    let mut line = Message::new();
    let built = match error.message() {
        Some(text) => line.push_str(text),
        None => usage_line(config.program, &mut line),
    };
    match built {
        Ok(()) => console.print(line.as_bytes()),
        Err(overflow) => console.print(overflow.message().unwrap_or_default().as_bytes()),
    }
}

fn usage_line(program: &str, out: &mut Message) -> Result<(), Error> {
    out.push_str("Usage: ")?;
    out.push_str(program)?;
    out.push_str(" <n>\n")
}
