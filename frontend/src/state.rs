//! Page-wide observable values.
//!
//! A controller owns an [`Observable`] and is the only writer. Everything
//! else gets a [`ReadOnly`] view that can be queried or subscribed to.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use yew::prelude::*;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Shared<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_id: Cell<u64>,
}

pub struct Observable<T> {
    shared: Rc<Shared<T>>,
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Stores `value` and notifies subscribers. Returns false (and notifies
    /// nobody) when the value did not change.
    pub fn set(&self, value: T) -> bool {
        if *self.shared.value.borrow() == value {
            return false;
        }
        *self.shared.value.borrow_mut() = value.clone();

        // Snapshot so a listener may unsubscribe while being notified.
        let listeners: Vec<Listener<T>> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&value);
        }
        true
    }

    pub fn reader(&self) -> ReadOnly<T> {
        ReadOnly {
            shared: self.shared.clone(),
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

pub struct ReadOnly<T> {
    shared: Rc<Shared<T>>,
}

impl<T: Clone + 'static> ReadOnly<T> {
    pub fn get(&self) -> T {
        self.shared.value.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        let listener: Listener<T> = Rc::new(listener);
        self.shared.listeners.borrow_mut().push((id, listener));

        let shared: Weak<Shared<T>> = Rc::downgrade(&self.shared);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.listeners.borrow_mut().retain(|(other, _)| *other != id);
                }
            })),
        }
    }
}

impl<T> Clone for ReadOnly<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> PartialEq for ReadOnly<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

/// Unsubscribes when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Current value of `source`, re-rendering the caller whenever it changes.
#[hook]
pub fn use_observable<T>(source: &ReadOnly<T>) -> T
where
    T: Clone + PartialEq + 'static,
{
    let value = use_state(|| source.get());
    {
        let value = value.clone();
        use_effect_with_deps(
            move |source: &ReadOnly<T>| {
                value.set(source.get());
                let subscription = source.subscribe(move |next: &T| value.set(next.clone()));
                move || drop(subscription)
            },
            source.clone(),
        );
    }
    (*value).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn test_reader_sees_writes() {
        let owner = Observable::new(1);
        let reader = owner.reader();
        assert_eq!(reader.get(), 1);
        owner.set(7);
        assert_eq!(reader.get(), 7);
    }

    #[test]
    fn test_notifies_only_on_change() {
        let owner = Observable::new(false);
        let (seen, listener) = recorder();
        let _subscription = owner.reader().subscribe(listener);

        assert!(owner.set(true));
        assert!(!owner.set(true));
        assert!(owner.set(false));

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_dropping_subscription_stops_notifications() {
        let owner = Observable::new(0u32);
        let (seen, listener) = recorder();
        let subscription = owner.reader().subscribe(listener);

        owner.set(1);
        drop(subscription);
        owner.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_subscription_outliving_owner_is_harmless() {
        let owner = Observable::new(0u32);
        let subscription = owner.reader().subscribe(|_| {});
        drop(owner);
        drop(subscription);
    }

    #[test]
    fn test_readers_of_same_source_compare_equal() {
        let owner = Observable::new(0u8);
        let other = Observable::new(0u8);
        assert!(owner.reader() == owner.reader());
        assert!(owner.reader() != other.reader());
    }
}
