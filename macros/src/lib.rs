//! Derive macros for the tasklist architecture
//!
//! This crate provides procedural macros to reduce boilerplate when building
//! reducer-driven systems.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums
//!
//! # Example
//!
//! ```ignore
//! use tasklist_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TaskAction {
//!     Add { title: String },
//!     ClearCompleted,
//! }
//!
//! // Generated method:
//! assert_eq!(TaskAction::Add { title: "test".into() }.name(), "add");
//! assert_eq!(TaskAction::ClearCompleted.name(), "clear-completed");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `name()` - Returns the kebab-case name of the variant, for logging
///   fields and display
///
/// The name is derived from the variant identifier: `ClearCompleted`
/// becomes `"clear-completed"`.
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if applied
/// to a non-enum type.
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TaskAction {
///     Add { title: String },
///     Toggle { id: TaskId },
///     ClearCompleted,
/// }
///
/// let action = TaskAction::Toggle { id };
/// tracing::debug!(command = action.name(), "dispatching");
/// ```
#[proc_macro_derive(Action)]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    // Generate name() match arms
    let name_arms = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        let kebab = to_kebab_case(&variant_name.to_string());
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #kebab, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #kebab, },
            Fields::Unit => quote! { Self::#variant_name => #kebab, },
        }
    });

    let expanded = quote! {
        impl #name {
            /// Returns the kebab-case name of this action variant
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Convert a CamelCase identifier to kebab-case
fn to_kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
