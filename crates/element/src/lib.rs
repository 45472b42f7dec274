//! vanilla-helpers-element - Host-environment element capability.
//!
//! The animation helper in `vanilla-helpers` mutates a live rendered element:
//! it toggles its hidden state, edits its class list, and listens for the
//! animation-end signal. This crate defines that surface as the [`Element`]
//! trait so the helper logic stays testable without a real rendering
//! environment, and provides [`FakeElement`], an in-memory implementation
//! that lets callers fire the animation-end signal by hand.

mod fake;

pub use fake::FakeElement;

/// Identifies one animation-end listener registration on an element.
///
/// Ids are allocated by [`Element::add_animation_end_listener`] and are
/// unique per element for the lifetime of that element.
pub type ListenerId = u64;

/// Capability surface of a renderable element, as far as the animation
/// helper needs it.
///
/// All methods take `&self`: the host model is single-threaded and
/// event-driven, so implementations are expected to use interior mutability
/// (a real binding wraps a host handle; [`FakeElement`] wraps
/// `Rc<RefCell<_>>`). Listeners registered here live until explicitly
/// removed or until the element itself is disposed by the host.
pub trait Element {
    /// Sets or clears the element's hidden state.
    fn set_hidden(&self, hidden: bool);

    /// Adds a class to the element's class list. Adding a class that is
    /// already present is a no-op.
    fn add_class(&self, class: &str);

    /// Removes a class from the element's class list. Removing a class that
    /// is not present is a no-op.
    fn remove_class(&self, class: &str);

    /// Registers a listener for the animation-end signal and returns its
    /// registration id.
    ///
    /// The listener may fire any number of times, once per signal, until it
    /// is removed. A listener is allowed to remove its own registration
    /// while it runs.
    fn add_animation_end_listener(&self, listener: Box<dyn FnMut()>) -> ListenerId;

    /// Removes a listener registration. Unknown ids are ignored.
    fn remove_animation_end_listener(&self, id: ListenerId);
}
