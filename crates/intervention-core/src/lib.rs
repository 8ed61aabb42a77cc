//! # The intervention store
//!
//! One small piece of shared application state: a counter and a name. There
//! are three parts:
//!
//! - `InterventionStore`: the state and its actions.
//! - `StoreRegistry`: one lazily created instance per application scope.
//! - `Snapshot` / `accept_hot_update`: carry state across a swap of the
//!   store instance during development.
//!
//! ## Reading and acting
//!
//! ```rust
//! use intervention_core::*;
//!
//! let registry = StoreRegistry::new();
//! let store = use_intervention_store(&registry).unwrap();
//!
//! assert_eq!(store.counter(), 0);
//! assert_eq!(store.name(), "Lutz");
//!
//! store.add_one();
//! store.add_one();
//! assert_eq!(store.counter(), 2);
//!
//! store.reset();
//! assert_eq!(store.counter(), 0);
//! ```
//!
//! The name has no setter; no action touches it.
//!
//! ## The double-count accessor
//!
//! `double_count()` reads like a derived value but behaves like an action:
//! every call bumps the counter by one and returns nothing.
//!
//! ```rust
//! use intervention_core::*;
//!
//! let store = InterventionStore::new();
//! store.double_count();
//! store.double_count();
//! assert_eq!(store.counter(), 2);
//! ```
//!
//! ## Listening
//!
//! `on_action` hooks run before an action is applied, `subscribe` callbacks
//! after, with the resulting state:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use intervention_core::*;
//!
//! let store = InterventionStore::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sub = store.subscribe({
//!     let seen = seen.clone();
//!     move |state| seen.borrow_mut().push(state.counter)
//! });
//!
//! store.add_one();
//! store.add_one();
//! store.unsubscribe(sub);
//! store.reset();
//!
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! ```
//!
//! ## Hot updates
//!
//! ```rust
//! use intervention_core::*;
//!
//! let registry = StoreRegistry::new();
//! let old = use_intervention_store(&registry).unwrap();
//! old.add_one();
//!
//! let new = registry.accept_hot_update(InterventionStore::new).unwrap();
//! assert_eq!(new.counter(), 1);
//! assert!(std::rc::Rc::ptr_eq(&new, &use_intervention_store(&registry).unwrap()));
//! ```

pub mod error;
pub mod registry;
pub mod signal;
pub mod state;
pub mod store;


pub use error::*;
pub use registry::*;
pub use signal::*;
pub use state::*;
pub use store::*;
