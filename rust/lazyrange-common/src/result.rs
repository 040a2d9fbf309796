pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with an `InvalidArgument` error when `expr` is false.
///
/// The failing condition is stringified into the error message, e.g.
/// `verify_arg!(stride, stride > 0)` fails with
/// `invalid argument stride: stride > 0`.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    log::debug!("rejected argument {name}: expected {condition}");
    Err(crate::error::Error::invalid_arg(name, condition))
}
