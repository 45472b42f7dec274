//! vanilla-helpers - Standalone helpers for browser-style scripts.
//!
//! Six independent leaf utilities, none depending on another:
//!
//! - [`insert_at`] - immutable positional insertion into an ordered map
//! - [`serialize_form`] - submittable form state as `{name, value}` pairs
//! - [`sanitize`] - text-node escaping of markup-significant characters
//! - [`deep_copy`] - structural deep copy via a JSON round-trip
//! - [`animate`] - CSS-animation lifecycle with a one-shot end listener
//! - [`sequences_equal`] - ordered elementwise sequence equality
//!
//! Every function degrades to a safe default on degenerate input instead of
//! signaling an error; the one fallible operation is [`deep_copy`].

pub mod animate;
pub mod arrays;
pub mod form;
pub mod html;
pub mod json_clone;
pub mod object;

pub use animate::animate;
pub use arrays::sequences_equal;
pub use form::{serialize_form, FieldKind, FormEntry, FormField, SelectOption};
pub use html::sanitize;
pub use json_clone::{deep_copy, DeepCopyError};
pub use object::insert_at;

// Re-export the host-element capability so callers need only one crate.
pub use vanilla_helpers_element::{Element, FakeElement, ListenerId};
