//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing

use proptest::test_runner::TestCaseResult;

/// Represents an input generated for testing purposes.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}
