//! CSS-animation lifecycle handling on a host element.

use std::cell::Cell;
use std::rc::Rc;

use vanilla_helpers_element::{Element, ListenerId};

/// Plays the named CSS animation on `elem` and cleans up when it ends.
///
/// If `elem` is `None` or `animation` is empty this does nothing. Otherwise
/// the element is un-hidden, the animation class is added, and a one-shot
/// animation-end listener is registered. When the end signal fires, the
/// listener removes the animation class, re-hides the element if `hide` was
/// set, and deregisters itself, so a repeated signal never reaches it a
/// second time.
///
/// The call returns immediately; the completion work runs whenever the host
/// delivers the animation-end signal. There is no cancellation handle: if
/// the animation never completes, the registration lives until the host
/// disposes of the element.
///
/// # Examples
///
/// ```
/// use vanilla_helpers::animate;
/// use vanilla_helpers_element::FakeElement;
///
/// let elem = FakeElement::new();
/// animate(Some(&elem), "fade-out", true);
/// assert!(elem.has_class("fade-out"));
///
/// elem.fire_animation_end();
/// assert!(!elem.has_class("fade-out"));
/// assert!(elem.hidden());
/// ```
pub fn animate<E>(elem: Option<&E>, animation: &str, hide: bool)
where
    E: Element + Clone + 'static,
{
    let elem = match elem {
        Some(elem) => elem,
        None => return,
    };
    if animation.is_empty() {
        return;
    }

    elem.set_hidden(false);
    elem.add_class(animation);

    // The listener needs its own registration id to deregister itself, but
    // the id only exists once registration returns; thread it through a
    // shared slot.
    let id_slot: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
    let slot = Rc::clone(&id_slot);
    let handle = elem.clone();
    let class = animation.to_string();

    let id = elem.add_animation_end_listener(Box::new(move || {
        handle.remove_class(&class);
        if hide {
            handle.set_hidden(true);
        }
        if let Some(id) = slot.get() {
            handle.remove_animation_end_listener(id);
        }
    }));
    id_slot.set(Some(id));
}
