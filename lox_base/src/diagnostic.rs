//! A module for handling diagnostics produced by the front end.
//!
//! Every phase receives a `&dyn Handler<E>` and pushes its errors into it instead of returning
//! them, so a single pass can report as many problems as it finds.

use std::{
    cell::{Cell, RefCell},
    fmt::Display,
    io::{self, Write},
    sync::{RwLock, RwLockReadGuard},
};

use derive_more::Deref;

use crate::log::{Message, Severity};

/// Represents a trait responsible for handling diagnostics produced by the front end.
pub trait Handler<T> {
    /// Receives an error and handles it.
    fn receive(&self, error: T);
}

/// Is implemented by every diagnostic that is attached to a line of the source code.
pub trait Diagnostic {
    /// Gets the 1-based line number the diagnostic was detected at.
    fn line(&self) -> usize;
}

/// Represents the overall outcome recorded by a [`Reporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Status {
    /// No diagnostic has been reported since creation or the last [`Reporter::reset`].
    #[default]
    Ok,

    /// At least one diagnostic has been reported.
    Error,
}

/// Is the diagnostic sink of the front end.
///
/// Keeps every reported diagnostic as a formatted `line N: message` string together with the
/// overall [`Status`]. The reporter performs no locking and is meant to be owned by a single
/// tokenization at a time.
#[derive(Debug, Default)]
pub struct Reporter {
    messages: RefCell<Vec<String>>,
    status: Cell<Status>,
}

impl Reporter {
    /// Creates a new [`Reporter`] with no diagnostics and the [`Status::Ok`] status.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Records a diagnostic at the given line and flips the status to [`Status::Error`].
    pub fn report(&self, line: usize, message: impl Display) {
        self.messages
            .borrow_mut()
            .push(format!("line {line}: {message}"));
        self.status.set(Status::Error);
    }

    /// Gets the current status of the reporter.
    #[must_use]
    pub fn status(&self) -> Status { self.status.get() }

    /// Checks whether any diagnostic has been reported.
    #[must_use]
    pub fn has_errors(&self) -> bool { self.status() == Status::Error }

    /// Gets a copy of all the formatted diagnostics in the order they were reported.
    #[must_use]
    pub fn messages(&self) -> Vec<String> { self.messages.borrow().clone() }

    /// Discards all the diagnostics and restores the [`Status::Ok`] status.
    pub fn reset(&self) {
        self.messages.borrow_mut().clear();
        self.status.set(Status::Ok);
    }

    /// Writes every stored diagnostic, one error log line each, in the order they were reported.
    ///
    /// # Errors
    /// Returns the first error produced by `out`.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for message in self.messages.borrow().iter() {
            writeln!(out, "{}", Message::new(Severity::Error, message))?;
        }

        Ok(())
    }

    /// Prints every stored diagnostic to the standard error stream.
    ///
    /// # Errors
    /// Returns the error produced while writing to the standard error stream.
    pub fn print(&self) -> io::Result<()> { self.write_to(&mut io::stderr().lock()) }
}

impl<T: Diagnostic + Display> Handler<T> for Reporter {
    fn receive(&self, error: T) { self.report(error.line(), &error); }
}

/// Is a struct that implements [`Handler`] trait by storing all errors in a vector.
#[derive(Debug, Deref)]
pub struct Storage<T: Send + Sync> {
    errors: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying vector of errors.
    pub fn into_vec(self) -> Vec<T> { self.errors.into_inner().unwrap() }

    /// Returns a reference to the underlying vector of errors.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.errors.read().unwrap() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, error: U) { self.errors.write().unwrap().push(error.into()); }
}

/// Is a struct that implements [`Handler`] trait by doing nothing with the errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _error: T) {}
}

/// Is a struct that implements [`Handler`] trait by counting the number of diagnostics received.
#[derive(Debug, Default)]
pub struct Counter {
    counter: Cell<usize>,
}

impl Counter {
    /// Returns the number of diagnostics received.
    #[must_use]
    pub fn count(&self) -> usize { self.counter.get() }

    /// Resets the counter to zero.
    pub fn reset(&self) { self.counter.set(0) }
}

impl<T> Handler<T> for Counter {
    fn receive(&self, _error: T) { self.counter.set(self.counter.get() + 1); }
}

#[cfg(test)]
mod tests;
