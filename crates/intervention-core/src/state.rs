use std::fmt;

/// Plain copy of everything a store holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreState {
    pub counter: i64,
    pub name: String,
}

/// The transitions a store accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Reset,
    AddOne,
    /// Reading the double-count accessor. Moves the counter like `AddOne`.
    DoubleCount,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Reset, Action::AddOne, Action::DoubleCount];

    pub fn name(self) -> &'static str {
        match self {
            Action::Reset => "reset",
            Action::AddOne => "add_one",
            Action::DoubleCount => "double_count",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exported state tagged with the id of the store it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub id: String,
    pub state: StoreState,
}

// State holder pattern
pub trait StateHolder: 'static {
    type State: Clone;
    type Event;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}
