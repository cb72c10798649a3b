//! The [`Constants`] trait and the [`constants!`](macro@crate::constants) macro.

use crate::ConstantBinding;

/// A type whose named constants can be enumerated at runtime.
///
/// Implement this with the [`constants!`](macro@crate::constants) macro rather than by hand, so the
/// associated constants and the binding table cannot drift apart.
pub trait Constants: 'static {
    /// The identifier the type is registered and labelled under.
    ///
    /// Defaults to the bare type name in [`constants!`](macro@crate::constants); two types
    /// sharing a name in different modules should give one an explicit name.
    const TYPE_NAME: &'static str;

    /// Constants declared directly on the type, in declaration order.
    fn declared_constants() -> Vec<ConstantBinding>;

    /// Constants inherited from a parent type, in the parent's order.
    fn inherited_constants() -> Vec<ConstantBinding> {
        Vec::new()
    }

    /// All constants visible on the type.
    ///
    /// Declared constants come first. Inherited constants follow, minus any
    /// the type redeclares.
    fn constants() -> Vec<ConstantBinding> {
        let mut bindings = Self::declared_constants();
        for inherited in Self::inherited_constants() {
            if !bindings.iter().any(|b| b.name() == inherited.name()) {
                bindings.push(inherited);
            }
        }
        bindings
    }
}

/// Declares associated constants on a type and implements [`Constants`] for it.
///
/// # Usage
///
/// ```
/// use constant_resolver_types::{constants, Constants, ConstValue};
///
/// pub struct HttpStatus;
///
/// constants! {
///     HttpStatus {
///         OK: u16 = 200,
///         NOT_FOUND: u16 = 404,
///     }
/// }
///
/// pub struct ExtendedStatus;
///
/// constants! {
///     ExtendedStatus: HttpStatus {
///         TEAPOT: u16 = 418,
///     }
/// }
///
/// assert_eq!(HttpStatus::NOT_FOUND, 404);
/// let names: Vec<_> = ExtendedStatus::constants()
///     .iter()
///     .map(|b| b.name().to_owned())
///     .collect();
/// assert_eq!(names, ["TEAPOT", "OK", "NOT_FOUND"]);
/// assert_eq!(ExtendedStatus::constants()[0].value(), &ConstValue::Int(418));
/// ```
///
/// The type must already be defined. The optional `: Parent` makes the
/// parent's constants inherited. `Type as "qualified::Name"` registers and
/// labels the type under an explicit name instead of its bare ident:
///
/// ```
/// use constant_resolver_types::{constants, Constants};
///
/// mod http {
///     pub struct Status;
/// }
///
/// use http::Status;
///
/// constants! {
///     Status as "http::Status" {
///         NOT_FOUND: u16 = 404,
///     }
/// }
///
/// assert_eq!(Status::TYPE_NAME, "http::Status");
/// ```
///
/// Every constant's type must convert into [`ConstValue`](crate::ConstValue) with `From`:
/// `bool`, `i8` to `i64`, `u8` to `u32`, `f32`, `f64`, `char`, `&str`,
/// `Option<T>` and slices of those. `u64`, `usize`, `isize`, `i128` and
/// `u128` may not fit and only convert with `TryFrom`, so declare such
/// constants as `i64`.
#[macro_export]
macro_rules! constants {
    (
        $ty:ident $(as $label:literal)? $(: $parent:ty)? {
            $( $(#[$meta:meta])* $name:ident : $cty:ty = $value:expr ),* $(,)?
        }
    ) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub const $name: $cty = $value;
            )*
        }

        impl $crate::Constants for $ty {
            const TYPE_NAME: &'static str = $crate::__constants_type_name!($ty $(, $label)?);

            fn declared_constants() -> ::std::vec::Vec<$crate::ConstantBinding> {
                ::std::vec![
                    $( $crate::ConstantBinding::new(stringify!($name), <$ty>::$name) ),*
                ]
            }

            $(
                fn inherited_constants() -> ::std::vec::Vec<$crate::ConstantBinding> {
                    <$parent as $crate::Constants>::constants()
                }
            )?
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __constants_type_name {
    ($ty:ident) => {
        stringify!($ty)
    };
    ($ty:ident, $label:literal) => {
        $label
    };
}
