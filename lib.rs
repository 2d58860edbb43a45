pub mod report;

/// Adds two integers together and returns the result.
///
/// Overflow follows the native `i32` semantics of the `+` operator: a panic
/// in debug builds, two's-complement wrapping in release builds.
///
/// # Examples
///
/// ```
/// assert_eq!(adder_core::add(20, 22), 42);
/// ```
pub fn add(x: i32, y: i32) -> i32 {
    x + y
}
