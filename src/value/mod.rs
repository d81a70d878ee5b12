//! Shared value cells: observable storage for one field's current value.
//!
//! A [`ValueCell`] sits between a field widget and the surrounding form
//! state. Multiple readers may observe it; exactly one logical owner (the
//! form record) commits changes back. Widgets never hold a private copy of
//! the value — they read through the cell and write back through [`set`],
//! which is the single mutation entry point.
//!
//! [`set`]: ValueCell::set

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde_json::Value;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifies one subscriber of a cell.
    pub struct SubscriberKey;
}

type Listener = Rc<dyn Fn(&Value)>;

struct CellInner {
    value: Value,
    subscribers: SlotMap<SubscriberKey, Listener>,
}

// ---------------------------------------------------------------------------
// ValueCell
// ---------------------------------------------------------------------------

/// A mutable, observable storage location for one field value.
///
/// Cheap to clone: clones share the same storage. `Value::Null` is the
/// "unset" sentinel; individual widgets map it to their own empty default
/// (a toggle reads it as `false`).
#[derive(Clone)]
pub struct ValueCell {
    inner: Rc<RefCell<CellInner>>,
}

impl ValueCell {
    /// Create a cell holding the given initial value.
    pub fn new(initial: Value) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                value: initial,
                subscribers: SlotMap::with_key(),
            })),
        }
    }

    /// Create an unset cell (`Value::Null`).
    pub fn unset() -> Self {
        Self::new(Value::Null)
    }

    /// Read the current value (cloned).
    pub fn get(&self) -> Value {
        self.inner.borrow().value.clone()
    }

    /// Read by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Whether the cell holds a value (anything but `Value::Null`).
    pub fn is_set(&self) -> bool {
        !self.inner.borrow().value.is_null()
    }

    /// Overwrite the value and notify subscribers.
    ///
    /// This is the single mutation entry point; the notification runs after
    /// the cell's borrow is released, so listeners may read the cell again.
    pub fn set(&self, value: Value) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.subscribers.values().cloned().collect()
        };
        let snapshot = self.get();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    /// Subscribe to value changes.
    ///
    /// The listener fires on every [`set`](Self::set) until the returned
    /// [`Subscription`] guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(&Value) + 'static) -> Subscription {
        let key = self
            .inner
            .borrow_mut()
            .subscribers
            .insert(Rc::new(listener));
        Subscription {
            cell: Rc::downgrade(&self.inner),
            key,
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl fmt::Debug for ValueCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCell")
            .field("value", &self.inner.borrow().value)
            .field("subscribers", &self.inner.borrow().subscribers.len())
            .finish()
    }
}

impl Default for ValueCell {
    fn default() -> Self {
        Self::unset()
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// RAII guard for a cell subscription; dropping it unsubscribes.
///
/// Holds only a weak reference, so an outstanding guard does not keep the
/// cell alive.
#[derive(Debug)]
pub struct Subscription {
    cell: Weak<RefCell<CellInner>>,
    key: SubscriberKey,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.cell.upgrade() {
            inner.borrow_mut().subscribers.remove(self.key);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn new_and_get() {
        let cell = ValueCell::new(json!(42));
        assert_eq!(cell.get(), json!(42));
        assert!(cell.is_set());
    }

    #[test]
    fn unset_is_null() {
        let cell = ValueCell::unset();
        assert_eq!(cell.get(), Value::Null);
        assert!(!cell.is_set());
    }

    #[test]
    fn set_overwrites() {
        let cell = ValueCell::unset();
        cell.set(json!("hello"));
        assert_eq!(cell.get(), json!("hello"));
    }

    #[test]
    fn with_reads_by_reference() {
        let cell = ValueCell::new(json!("hello"));
        let len = cell.with(|v| v.as_str().map(str::len));
        assert_eq!(len, Some(5));
    }

    #[test]
    fn clones_share_storage() {
        let a = ValueCell::new(json!(1));
        let b = a.clone();
        b.set(json!(2));
        assert_eq!(a.get(), json!(2));
    }

    #[test]
    fn subscribers_are_notified() {
        let cell = ValueCell::unset();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_c = seen.clone();
        let _sub = cell.subscribe(move |v| seen_c.borrow_mut().push(v.clone()));
        cell.set(json!(1));
        cell.set(json!(2));
        assert_eq!(*seen.borrow(), vec![json!(1), json!(2)]);
    }

    #[test]
    fn multiple_subscribers() {
        let cell = ValueCell::unset();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let a_c = a.clone();
        let b_c = b.clone();
        let _s1 = cell.subscribe(move |_| a_c.set(a_c.get() + 1));
        let _s2 = cell.subscribe(move |_| b_c.set(b_c.get() + 1));
        cell.set(json!(true));
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let cell = ValueCell::unset();
        let count = Rc::new(Cell::new(0));
        let count_c = count.clone();
        let sub = cell.subscribe(move |_| count_c.set(count_c.get() + 1));
        cell.set(json!(1));
        assert_eq!(count.get(), 1);
        drop(sub);
        cell.set(json!(2));
        assert_eq!(count.get(), 1);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn listener_may_read_the_cell() {
        let cell = ValueCell::unset();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_c = seen.clone();
        let cell_c = cell.clone();
        let _sub = cell.subscribe(move |_| seen_c.borrow_mut().push(cell_c.get()));
        cell.set(json!(7));
        assert_eq!(*seen.borrow(), vec![json!(7)]);
    }

    #[test]
    fn subscription_outliving_cell_is_harmless() {
        let cell = ValueCell::unset();
        let sub = cell.subscribe(|_| {});
        drop(cell);
        drop(sub); // weak upgrade fails, no panic
    }

    #[test]
    fn debug_output() {
        let cell = ValueCell::new(json!(3));
        let dbg = format!("{cell:?}");
        assert!(dbg.contains("ValueCell"));
    }
}
