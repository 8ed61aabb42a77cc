use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubId = usize;

thread_local! {
    static NEXT_SUB: Cell<SubId> = const { Cell::new(0) };
}

fn next_sub_id() -> SubId {
    NEXT_SUB.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

/// An ordered list of callbacks.
///
/// Ids come from one per-thread counter, so they stay unique when lists are
/// merged with [`absorb`](Self::absorb).
///
/// Callbacks are cloned out before they run, so a callback may freely read
/// (or even write) the value that triggered it.
pub struct Subscribers<T: 'static>(Rc<RefCell<Slots<T>>>);

struct Slots<T> {
    entries: Vec<(SubId, Rc<dyn Fn(&T)>)>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Slots {
            entries: Vec::new(),
        })))
    }

    pub fn add(&self, f: impl Fn(&T) + 'static) -> SubId {
        let id = next_sub_id();
        self.0.borrow_mut().entries.push((id, Rc::new(f)));
        id
    }

    pub fn remove(&self, id: SubId) -> bool {
        let mut slots = self.0.borrow_mut();
        let before = slots.entries.len();
        slots.entries.retain(|(sid, _)| *sid != id);
        slots.entries.len() != before
    }

    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Rc<dyn Fn(&T)>> = self
            .0
            .borrow()
            .entries
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in callbacks {
            f(value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.0.borrow_mut().entries.clear();
    }

    /// Moves every callback of `other` into `self`. Their ids stay valid.
    pub fn absorb(&self, other: &Subscribers<T>) {
        if Rc::ptr_eq(&self.0, &other.0) {
            return;
        }
        let mut theirs = other.0.borrow_mut();
        let mut ours = self.0.borrow_mut();
        ours.entries.append(&mut theirs.entries);
        ours.entries.sort_by_key(|(id, _)| *id);
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable value cell. Every write notifies the subscribers with the new
/// value after the write has completed.
pub struct Signal<T: 'static> {
    value: Rc<RefCell<T>>,
    subs: Subscribers<T>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subs: Subscribers::new(),
        }
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        let current = {
            let mut value = self.value.borrow_mut();
            *value = v;
            value.clone()
        };
        self.subs.notify(&current);
    }

    /// Writes without notifying anyone.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.value.borrow_mut())
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.subs.add(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.subs.remove(id)
    }

    pub fn subscribers(&self) -> &Subscribers<T> {
        &self.subs
    }
}
