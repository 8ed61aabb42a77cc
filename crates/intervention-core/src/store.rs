use std::cell::Cell;
use std::rc::Rc;

use crate::signal::{SubId, Subscribers};
use crate::{Action, Signal, Snapshot, StateHolder, Store, StoreError, StoreRegistry, StoreState};

pub const STORE_ID: &str = "intervention";
pub const DEFAULT_NAME: &str = "Lutz";

/// Handle returned by [`InterventionStore::subscribe`] and
/// [`InterventionStore::on_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscription {
    State(SubId),
    Action(SubId),
}

/// The intervention store: a counter, a fixed name, and the actions that
/// move the counter.
///
/// Every action goes through [`dispatch`](Self::dispatch): action hooks see
/// it first, then the counter changes, then state subscribers see the result.
///
/// After [`StoreRegistry::accept_hot_update`] the previous instance is
/// detached: its listeners now live on the replacement, so writes through an
/// old handle reach nobody. Such writes still apply but log a warning.
pub struct InterventionStore {
    counter: Signal<i64>,
    name: String,
    action_hooks: Subscribers<Action>,
    detached: Cell<bool>,
}

impl InterventionStore {
    pub fn new() -> Self {
        let StoreState { counter, name } = Self::initial_state();
        Self {
            counter: Signal::new(counter),
            name,
            action_hooks: Subscribers::new(),
            detached: Cell::new(false),
        }
    }

    pub fn counter(&self) -> i64 {
        self.counter.get()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The double-count accessor.
    ///
    /// Despite the name this does not compute anything: each read bumps the
    /// counter by one and yields nothing.
    pub fn double_count(&self) {
        self.dispatch(Action::DoubleCount);
    }

    pub fn reset(&self) {
        self.dispatch(Action::Reset);
    }

    pub fn add_one(&self) {
        self.dispatch(Action::AddOne);
    }

    pub fn dispatch(&self, action: Action) {
        if self.detached.get() {
            log::warn!("{STORE_ID}: {action} on an instance replaced by a hot update; nobody observes it");
        }
        self.action_hooks.notify(&action);
        let next = Self::reduce(&self.state(), action);
        log::debug!("{STORE_ID}: {action} -> counter = {}", next.counter);
        self.counter.set(next.counter);
    }

    pub fn state(&self) -> StoreState {
        StoreState {
            counter: self.counter(),
            name: self.name.clone(),
        }
    }

    /// Calls `f` with the new state after every action.
    pub fn subscribe(&self, f: impl Fn(&StoreState) + 'static) -> Subscription {
        let name = self.name.clone();
        let id = self.counter.subscribe(move |counter| {
            f(&StoreState {
                counter: *counter,
                name: name.clone(),
            })
        });
        Subscription::State(id)
    }

    /// Calls `f` with every action before it is applied.
    pub fn on_action(&self, f: impl Fn(&Action) + 'static) -> Subscription {
        Subscription::Action(self.action_hooks.add(f))
    }

    pub fn unsubscribe(&self, sub: Subscription) -> bool {
        match sub {
            Subscription::State(id) => self.counter.unsubscribe(id),
            Subscription::Action(id) => self.action_hooks.remove(id),
        }
    }

    /// Whether a hot update has replaced this instance.
    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    pub fn listener_count(&self) -> usize {
        self.counter.subscribers().len() + self.action_hooks.len()
    }
}

impl Default for InterventionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHolder for InterventionStore {
    type State = StoreState;
    type Event = Action;

    fn initial_state() -> StoreState {
        StoreState {
            counter: 0,
            name: DEFAULT_NAME.to_string(),
        }
    }

    fn reduce(state: &StoreState, event: Action) -> StoreState {
        let counter = match event {
            Action::Reset => 0,
            Action::AddOne | Action::DoubleCount => state.counter.wrapping_add(1),
        };
        StoreState {
            counter,
            name: state.name.clone(),
        }
    }
}

impl Store for InterventionStore {
    const ID: &'static str = STORE_ID;

    type Snapshot = Snapshot;

    fn export_state(&self) -> Snapshot {
        Snapshot {
            id: STORE_ID.to_string(),
            state: self.state(),
        }
    }

    /// Restores the counter. The name is fixed and is never taken from the
    /// snapshot. Subscribers are not notified.
    fn apply_snapshot(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if snapshot.id != STORE_ID {
            return Err(StoreError::SnapshotMismatch {
                expected: STORE_ID,
                found: snapshot.id.clone(),
            });
        }
        self.counter.with_mut(|c| *c = snapshot.state.counter);
        Ok(())
    }

    fn adopt_listeners(&self, previous: &Self) {
        self.counter.subscribers().absorb(previous.counter.subscribers());
        self.action_hooks.absorb(&previous.action_hooks);
        previous.detached.set(true);
    }

    fn dispose(&self) {
        self.counter.subscribers().clear();
        self.action_hooks.clear();
    }
}

/// Returns the scope's intervention store, creating it on first use.
pub fn use_intervention_store(registry: &StoreRegistry) -> Result<Rc<InterventionStore>, StoreError> {
    registry.use_store(InterventionStore::new)
}
