//! Procedural macros for Roster.
//!
//! - `enumeration!` - Declare a type together with its enumeration members

use proc_macro::TokenStream;

mod enumeration;

/// Declare an enumeration type.
///
/// ```rust,ignore
/// roster::enumeration! {
///     /// Primary colors.
///     pub struct Colors {
///         RED = "red",
///         GREEN = "green",
///     }
/// }
///
/// roster::enumeration! {
///     pub struct Shades: Colors {
///         ORANGE = "orange",
///         PINK,              // value defaults to the symbol :PINK
///         LEVEL = 3,
///         ON = true,
///         BLUE = :blue,
///     }
/// }
///
/// assert_eq!(Colors::RED, Value::from("red"));
/// assert_eq!(Shades::values().len(), 7);
/// ```
///
/// Keys and values repeated inside one declaration are compile errors.
/// Clashes with the parent's members panic with the rendered `DefineError`
/// the first time the registry is accessed.
#[proc_macro]
pub fn enumeration(input: TokenStream) -> TokenStream {
    enumeration::enumeration_impl(input)
}
