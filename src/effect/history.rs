//! History - an undo/redo log over a current value.
//!
//! `History<A>` tracks a current value together with an undo stack and a
//! redo stack. The undo stack always retains the initial value, so `undo`
//! refuses (returning `false`) rather than drain it; `push` starts a new
//! timeline and clears any pending redos.
//!
//! The [`push`], [`undo`], [`redo`] and [`current`] free functions lift
//! the same operations into [`State`] computations, so an edit session
//! composes as one state pipeline:
//!
//! ```rust
//! use effectual::effect::{history, History};
//!
//! let session = history::push(1)
//!     .then(history::push(2))
//!     .then(history::undo())
//!     .then(history::redo())
//!     .then(history::current());
//!
//! let (value, log) = session.run(History::new(0));
//! assert_eq!(value, 2);
//! assert_eq!(log.current(), &2);
//! ```

use super::state::State;

/// An undoable value: the current state plus undo and redo stacks.
///
/// The undo stack holds every value reachable by undoing, oldest first,
/// with the current value as its last entry; it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<A> {
    current: A,
    undos: Vec<A>,
    redos: Vec<A>,
}

impl<A> History<A>
where
    A: Clone,
{
    /// Starts a history at an initial value.
    ///
    /// The initial value can never be undone away.
    pub fn new(initial: A) -> Self {
        Self {
            current: initial.clone(),
            undos: vec![initial],
            redos: Vec::new(),
        }
    }

    /// The current value.
    pub const fn current(&self) -> &A {
        &self.current
    }

    /// How many times `undo` can currently succeed.
    pub fn undo_depth(&self) -> usize {
        self.undos.len() - 1
    }

    /// How many times `redo` can currently succeed.
    pub fn redo_depth(&self) -> usize {
        self.redos.len()
    }

    /// Records a new current value and clears the redo stack.
    pub fn push(&mut self, value: A) {
        self.undos.push(value.clone());
        self.current = value;
        self.redos.clear();
    }

    /// Steps back to the previous value.
    ///
    /// Returns `false` and leaves everything unchanged when only the
    /// initial value remains.
    pub fn undo(&mut self) -> bool {
        if self.undos.len() < 2 {
            return false;
        }
        if let Some(abandoned) = self.undos.pop() {
            self.redos.push(abandoned);
        }
        if let Some(previous) = self.undos.last() {
            self.current = previous.clone();
        }
        true
    }

    /// Re-applies the most recently undone value.
    ///
    /// Returns `false` and leaves everything unchanged when nothing has
    /// been undone since the last `push`.
    pub fn redo(&mut self) -> bool {
        match self.redos.pop() {
            Some(value) => {
                self.current = value.clone();
                self.undos.push(value);
                true
            }
            None => false,
        }
    }
}

/// Records a new value, as a [`State`] computation.
pub fn push<A>(value: A) -> State<History<A>, ()>
where
    A: Clone + 'static,
{
    State::modify(move |mut history: History<A>| {
        history.push(value.clone());
        history
    })
}

/// Steps back one value, as a [`State`] computation producing the success
/// flag.
pub fn undo<A>() -> State<History<A>, bool>
where
    A: Clone + 'static,
{
    State::new(|mut history: History<A>| {
        let succeeded = history.undo();
        (succeeded, history)
    })
}

/// Re-applies the most recently undone value, as a [`State`] computation
/// producing the success flag.
pub fn redo<A>() -> State<History<A>, bool>
where
    A: Clone + 'static,
{
    State::new(|mut history: History<A>| {
        let succeeded = history.redo();
        (succeeded, history)
    })
}

/// Reads the current value, as a [`State`] computation.
pub fn current<A>() -> State<History<A>, A>
where
    A: Clone + 'static,
{
    State::gets(|history: &History<A>| history.current().clone())
}
