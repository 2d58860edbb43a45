//! Formatted sum reports as printed by the `adder` binary.

use std::fmt::{self, Display};

use crate::add;

/// Two addends together with their sum.
///
/// The `Display` form is the one-line sentence that the `adder` binary
/// writes to standard output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SumReport {
    lhs: i32,
    rhs: i32,
    sum: i32,
}

impl Display for SumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The sum of {} and {} is: {}",
            self.lhs, self.rhs, self.sum
        )
    }
}

impl SumReport {
    /// Compute a `SumReport` from two addends.
    ///
    /// # Examples
    ///
    /// ```
    /// use adder_core::report::SumReport;
    ///
    /// let report = SumReport::compute(5, 10);
    /// assert_eq!(report.to_string(), "The sum of 5 and 10 is: 15");
    /// ```
    pub fn compute(lhs: i32, rhs: i32) -> Self {
        SumReport {
            lhs,
            rhs,
            sum: add(lhs, rhs),
        }
    }

    /// The computed sum.
    pub fn sum(&self) -> i32 {
        self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        assert_eq!(SumReport::compute(5, 10).sum(), 15);
        assert_eq!(SumReport::compute(-3, 3).sum(), 0);
        assert_eq!(SumReport::compute(0, 0).sum(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", SumReport::compute(5, 10)),
            "The sum of 5 and 10 is: 15"
        );
        assert_eq!(
            format!("{}", SumReport::compute(-3, 3)),
            "The sum of -3 and 3 is: 0"
        );
    }
}
