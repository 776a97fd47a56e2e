//! Macro for implementing Display for label enums
//!
//! Request kinds and identity roles show up in log fields and error
//! messages; this macro gives them one lowercase string form.
//!
//! # Example
//!
//! ```rust
//! use profilegate_domain::impl_domain_label_display;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Web,
//!     Mobile,
//! }
//!
//! impl_domain_label_display!(Channel {
//!     Web => "web",
//!     Mobile => "mobile",
//! });
//!
//! assert_eq!(Channel::Web.to_string(), "web");
//! assert_eq!(Channel::Mobile.to_string(), "mobile");
//! ```

/// Implements Display for label enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase labels
#[macro_export]
macro_rules! impl_domain_label_display {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }
    };
}
