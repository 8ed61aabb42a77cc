use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::StoreError;

/// A store that can be mounted in a [`StoreRegistry`].
pub trait Store: 'static {
    /// Registry key. Unique per application scope.
    const ID: &'static str;

    type Snapshot;

    fn export_state(&self) -> Self::Snapshot;

    fn apply_snapshot(&self, snapshot: &Self::Snapshot) -> Result<(), StoreError>;

    /// Takes over the listeners registered on `previous`.
    fn adopt_listeners(&self, previous: &Self);

    /// Drops every listener. Called when the owning scope ends.
    fn dispose(&self);
}

trait Mounted {
    fn dispose(&self);
    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<S: Store> Mounted for S {
    fn dispose(&self) {
        Store::dispose(self)
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

/// One live instance per store id, created on first use.
///
/// The registry is the explicit stand-in for a process-wide store: construct
/// it once per application scope and hand it (or the handles it returns) to
/// whoever needs the stores. Dropping the registry ends the scope.
#[derive(Default)]
pub struct StoreRegistry {
    stores: RefCell<HashMap<&'static str, Rc<dyn Mounted>>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instance registered under `S::ID`, running `init` if there
    /// is none yet.
    pub fn use_store<S: Store>(&self, init: impl FnOnce() -> S) -> Result<Rc<S>, StoreError> {
        let existing = self.stores.borrow().get(S::ID).cloned();
        if let Some(mounted) = existing {
            return downcast::<S>(mounted);
        }

        // `init` runs unborrowed so it may mount other stores.
        let store = Rc::new(init());
        let mut stores = self.stores.borrow_mut();
        if let Some(mounted) = stores.get(S::ID).cloned() {
            log::warn!("store `{}` was mounted while initialising; keeping the first", S::ID);
            return downcast::<S>(mounted);
        }
        log::debug!("mounting store `{}`", S::ID);
        stores.insert(S::ID, store.clone());
        Ok(store)
    }

    /// Replaces the live instance of `S` with a fresh one from `factory`,
    /// carrying its state and listeners across.
    ///
    /// Handles obtained before the update keep pointing at the old instance;
    /// call [`use_store`](Self::use_store) again to reach the new one.
    pub fn accept_hot_update<S: Store>(&self, factory: impl FnOnce() -> S) -> Result<Rc<S>, StoreError> {
        let existing = self
            .stores
            .borrow()
            .get(S::ID)
            .cloned()
            .ok_or(StoreError::NotRegistered { id: S::ID })?;
        let previous = downcast::<S>(existing)?;

        let next = Rc::new(factory());
        next.apply_snapshot(&previous.export_state())?;
        next.adopt_listeners(&previous);

        self.stores.borrow_mut().insert(S::ID, next.clone());
        log::debug!("hot update applied to store `{}`", S::ID);
        Ok(next)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stores.borrow().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.stores.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tears down every mounted store. The registry stays usable; the next
    /// `use_store` starts from a fresh instance.
    pub fn dispose(&self) {
        let stores = std::mem::take(&mut *self.stores.borrow_mut());
        if !stores.is_empty() {
            log::debug!("disposing {} store(s)", stores.len());
        }
        for (_, store) in stores {
            store.dispose();
        }
    }
}

impl Drop for StoreRegistry {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn downcast<S: Store>(mounted: Rc<dyn Mounted>) -> Result<Rc<S>, StoreError> {
    mounted
        .into_any()
        .downcast::<S>()
        .map_err(|_| StoreError::TypeMismatch { id: S::ID })
}
