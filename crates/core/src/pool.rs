//! Resource pool - lazily constructed, reusable instances
//!
//! A [`Pool`] keeps two disjoint sets: instances sitting on the shelf ready to be
//! handed out, and ids of instances currently checked out. [`Pool::check_out`]
//! returns a scoped [`Checkout`] guard; dropping the guard puts the instance back.
//!
//! The pool is single-threaded (`Rc`-based, so neither `Send` nor `Sync`). A
//! checkout must be returned before another holder can observe that instance.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::{Rc, Weak};

use thiserror::Error;
use tracing::{error, trace};

/// Capability required of pooled resource types.
pub trait Poolable: Sized {
    /// Construction arguments, used only when the shelf is empty.
    type Args;

    fn construct(args: Self::Args) -> Self;

    /// Release held resources when the pool is torn down.
    fn dispose(&mut self) {}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("pool torn down with {0} instance(s) still checked out")]
    OutstandingCheckouts(usize),
}

struct Slot<T> {
    id: u64,
    value: T,
}

struct Shelf<T> {
    available: Vec<Slot<T>>,
    checked_out: HashSet<u64>,
    next_id: u64,
    closed: bool,
}

impl<T: Poolable> Shelf<T> {
    fn give_back(&mut self, slot: Slot<T>) {
        if !self.checked_out.remove(&slot.id) {
            error!(id = slot.id, "returned an instance that was not checked out");
            debug_assert!(false, "pool instance {} returned twice", slot.id);
            return;
        }
        trace!(id = slot.id, "instance returned");
        self.available.push(slot);
    }

    /// Dispose every shelved instance; returns the number still checked out.
    fn teardown(&mut self) -> usize {
        self.closed = true;
        for slot in self.available.iter_mut() {
            slot.value.dispose();
        }
        self.available.clear();
        self.checked_out.len()
    }
}

/// Checkout/return registry for one resource type.
pub struct Pool<T: Poolable> {
    shelf: Rc<RefCell<Shelf<T>>>,
}

impl<T: Poolable> Pool<T> {
    pub fn new() -> Self {
        Self {
            shelf: Rc::new(RefCell::new(Shelf {
                available: Vec::new(),
                checked_out: HashSet::new(),
                next_id: 0,
                closed: false,
            })),
        }
    }

    /// Hand out the most recently returned instance, or construct one from `args`.
    ///
    /// `args` is dropped unused when an instance is reused.
    pub fn check_out(&self, args: T::Args) -> Checkout<T> {
        let mut shelf = self.shelf.borrow_mut();
        let slot = match shelf.available.pop() {
            Some(slot) => slot,
            None => {
                let id = shelf.next_id;
                shelf.next_id += 1;
                trace!(id, "constructing pooled instance");
                Slot {
                    id,
                    value: T::construct(args),
                }
            }
        };

        let fresh = shelf.checked_out.insert(slot.id);
        debug_assert!(fresh, "instance {} handed out twice", slot.id);

        Checkout {
            id: slot.id,
            value: Some(slot.value),
            shelf: Rc::downgrade(&self.shelf),
        }
    }

    /// Instances on the shelf.
    pub fn available(&self) -> usize {
        self.shelf.borrow().available.len()
    }

    /// Instances currently held by a [`Checkout`].
    pub fn checked_out(&self) -> usize {
        self.shelf.borrow().checked_out.len()
    }

    /// Tear the pool down, disposing shelved instances.
    ///
    /// Fails if any checkout is still alive; those instances are disposed when
    /// their guards drop.
    pub fn close(self) -> Result<(), PoolError> {
        let outstanding = self.shelf.borrow_mut().teardown();
        if outstanding > 0 {
            error!(outstanding, "pool closed with live checkouts");
            return Err(PoolError::OutstandingCheckouts(outstanding));
        }
        Ok(())
    }
}

impl<T: Poolable> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Poolable> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("available", &self.available())
            .field("checked_out", &self.checked_out())
            .finish()
    }
}

impl<T: Poolable> Drop for Pool<T> {
    fn drop(&mut self) {
        let mut shelf = self.shelf.borrow_mut();
        if shelf.closed {
            return;
        }
        let outstanding = shelf.teardown();
        if outstanding > 0 {
            error!(outstanding, "pool dropped with live checkouts");
        }
        debug_assert_eq!(outstanding, 0, "pool dropped with live checkouts");
    }
}

/// Scoped handle to a checked-out instance. Returns it to the pool on drop.
pub struct Checkout<T: Poolable> {
    id: u64,
    // `Some` for the whole life of the guard; taken only in `drop`.
    value: Option<T>,
    shelf: Weak<RefCell<Shelf<T>>>,
}

impl<T: Poolable> Checkout<T> {
    /// Stable id of the pooled instance; equal ids mean the same instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Return the instance now instead of at scope exit.
    pub fn release(self) {
        drop(self);
    }
}

impl<T: Poolable> Deref for Checkout<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value.as_ref().expect("checkout value taken before drop")
    }
}

impl<T: Poolable> DerefMut for Checkout<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value.as_mut().expect("checkout value taken before drop")
    }
}

impl<T: Poolable> Drop for Checkout<T> {
    fn drop(&mut self) {
        let Some(mut value) = self.value.take() else {
            return;
        };
        match self.shelf.upgrade() {
            Some(shelf) => shelf.borrow_mut().give_back(Slot { id: self.id, value }),
            // Pool already gone: nobody left to return to.
            None => value.dispose(),
        }
    }
}
