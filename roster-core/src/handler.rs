//! # Case Handlers
//!
//! A case handler is the code that runs when a dispatched value falls into a
//! value group. Handlers come in two shapes:
//!
//! - **Nullary**: `Fn() -> T`, invoked plainly
//! - **Unary**: `Fn(&Value) -> T`, invoked with the dispatched value
//!
//! The shape is fixed when the handler is added to a case mapping, through
//! [`IntoCaseHandler`]. A handler is never called with the wrong number of
//! arguments.
//!
//! Unary closures need their parameter annotated (`|color: &Value| ...`) so
//! the compiler can tell the two shapes apart.

use crate::value::Value;
use std::fmt;

/// A handler with its arity resolved.
pub enum CaseHandler<'a, T> {
    /// Takes no arguments.
    Nullary(Box<dyn Fn() -> T + 'a>),
    /// Takes the dispatched value.
    Unary(Box<dyn Fn(&Value) -> T + 'a>),
}

impl<T> CaseHandler<'_, T> {
    /// Invoke the handler according to its arity.
    pub fn invoke(&self, value: &Value) -> T {
        match self {
            CaseHandler::Nullary(f) => f(),
            CaseHandler::Unary(f) => f(value),
        }
    }

    /// Number of parameters the handler takes.
    pub fn arity(&self) -> usize {
        match self {
            CaseHandler::Nullary(_) => 0,
            CaseHandler::Unary(_) => 1,
        }
    }
}

impl<T> fmt::Debug for CaseHandler<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseHandler")
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

/// Marker for handlers taking no arguments.
pub struct NoArgs;

/// Marker for handlers taking the dispatched value.
pub struct WithValue;

/// Conversion of a closure into a [`CaseHandler`].
///
/// `Args` is a marker ([`NoArgs`] or [`WithValue`]) that keeps the two
/// blanket implementations apart.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a case handler returning `{T}`",
    label = "expected `Fn() -> {T}` or `Fn(&Value) -> {T}`",
    note = "Annotate the parameter of unary closures: `|value: &Value| ...`."
)]
pub trait IntoCaseHandler<'a, T, Args> {
    /// Resolve the handler's arity.
    fn into_case_handler(self) -> CaseHandler<'a, T>;
}

impl<'a, T, F> IntoCaseHandler<'a, T, NoArgs> for F
where
    F: Fn() -> T + 'a,
{
    fn into_case_handler(self) -> CaseHandler<'a, T> {
        CaseHandler::Nullary(Box::new(self))
    }
}

impl<'a, T, F> IntoCaseHandler<'a, T, WithValue> for F
where
    F: Fn(&Value) -> T + 'a,
{
    fn into_case_handler(self) -> CaseHandler<'a, T> {
        CaseHandler::Unary(Box::new(self))
    }
}

impl<'a, T> IntoCaseHandler<'a, T, CaseHandler<'a, T>> for CaseHandler<'a, T> {
    fn into_case_handler(self) -> CaseHandler<'a, T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve<'a, T, A>(h: impl IntoCaseHandler<'a, T, A>) -> CaseHandler<'a, T> {
        h.into_case_handler()
    }

    #[test]
    fn nullary_ignores_value() {
        let handler = resolve(|| "blue");
        assert_eq!(handler.arity(), 0);
        assert_eq!(handler.invoke(&Value::symbol("red")), "blue");
    }

    #[test]
    fn unary_receives_value() {
        let handler = resolve(|color: &Value| format!("is {color}"));
        assert_eq!(handler.arity(), 1);
        assert_eq!(handler.invoke(&Value::symbol("red")), "is red");
    }
}
