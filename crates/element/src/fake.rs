//! In-memory element for exercising animation logic without a renderer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Element, ListenerId};

type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct Inner {
    hidden: bool,
    classes: Vec<String>,
    next_listener_id: ListenerId,
    listeners: Vec<(ListenerId, Listener)>,
}

/// An [`Element`] backed by plain in-process state.
///
/// Cloning a `FakeElement` clones the handle, not the state: all clones see
/// the same hidden flag, class list, and listener registry, the way multiple
/// references to one live element would.
///
/// # Examples
///
/// ```
/// use vanilla_helpers_element::{Element, FakeElement};
///
/// let elem = FakeElement::new();
/// elem.add_class("fade-in");
/// assert!(elem.has_class("fade-in"));
///
/// elem.add_animation_end_listener(Box::new(|| {}));
/// assert_eq!(elem.listener_count(), 1);
/// elem.fire_animation_end();
/// ```
#[derive(Clone, Default)]
pub struct FakeElement {
    inner: Rc<RefCell<Inner>>,
}

impl FakeElement {
    /// Creates a visible element with no classes and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element that starts out hidden.
    pub fn new_hidden() -> Self {
        let elem = Self::new();
        elem.inner.borrow_mut().hidden = true;
        elem
    }

    /// Whether the element is currently hidden.
    pub fn hidden(&self) -> bool {
        self.inner.borrow().hidden
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    /// The current class list, in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    /// Number of animation-end listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Delivers one animation-end signal to every registered listener, in
    /// registration order.
    ///
    /// Dispatch runs over a snapshot of the registry taken up front, with no
    /// borrow held while a listener runs, so listeners may add or remove
    /// registrations (including their own) mid-dispatch. A listener removed
    /// earlier in the same dispatch is skipped; one added mid-dispatch waits
    /// for the next signal.
    pub fn fire_animation_end(&self) {
        let snapshot: Vec<(ListenerId, Listener)> = self.inner.borrow().listeners.clone();
        for (id, listener) in snapshot {
            let still_registered = self
                .inner
                .borrow()
                .listeners
                .iter()
                .any(|(lid, _)| *lid == id);
            if !still_registered {
                continue;
            }
            (listener.borrow_mut())();
        }
    }
}

impl Element for FakeElement {
    fn set_hidden(&self, hidden: bool) {
        self.inner.borrow_mut().hidden = hidden;
    }

    fn add_class(&self, class: &str) {
        let mut inner = self.inner.borrow_mut();
        if !inner.classes.iter().any(|c| c == class) {
            inner.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.retain(|c| c != class);
    }

    fn add_animation_end_listener(&self, listener: Box<dyn FnMut()>) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Rc::new(RefCell::new(listener))));
        id
    }

    fn remove_animation_end_listener(&self, id: ListenerId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(lid, _)| *lid != id);
    }
}
