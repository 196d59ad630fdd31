//! State monad - computations that thread a value through a pipeline.
//!
//! A `State<S, A>` wraps a transition function `S -> (A, S)`: given the
//! current state it produces a result and the next state. Composing with
//! `flat_map` threads the state through every step implicitly, so a
//! pipeline reads like straight-line code while staying pure.
//!
//! # Note on Type Classes
//!
//! State provides its own `fmap`, `flat_map`, `map2`, etc. methods directly
//! on the type rather than implementing the Functor/Applicative/Monad
//! traits: the representation is an `Rc<dyn Fn>`, which forces `'static`
//! bounds the trait signatures do not carry. The methods obey the same
//! laws as their trait counterparts.
//!
//! # Laws
//!
//! In addition to the Functor/Applicative/Monad laws:
//!
//! - Get Put: `State::get().flat_map(State::put) == State::pure(())`
//! - Put Get: `State::put(s).then(State::get())` produces `s`
//! - Put Put: `State::put(s1).then(State::put(s2)) == State::put(s2)`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 3);
//! ```

use std::rc::Rc;

/// A computation that threads a state value through a pipeline.
///
/// `State<S, A>` represents `S -> (A, S)`: run with an initial state, it
/// yields a result and the successor state.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::State;
///
/// let computation: State<i32, i32> = State::get()
///     .flat_map(|current| State::put(current + 1).then(State::pure(current)));
///
/// let (result, final_state) = computation.run(10);
/// assert_eq!(result, 10);
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped transition. `Rc` so the computation can be cloned when
    /// a combinator needs to reuse it.
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    ///
    /// A `State` can be run any number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
    /// assert_eq!(state.run(10), (11, 20));
    /// assert_eq!(state.run(3), (4, 6));
    /// ```
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.eval(10), 20);
    /// ```
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and keeps only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.exec(10), 11);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Lifts a value into a computation that leaves the state untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// assert_eq!(state.run(42), ("constant", 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result, leaving state handling untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, i32> = State::get().fmap(|value| value * 2);
    /// assert_eq!(state.run(21), (42, 21));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let previous = self.transition;
        State::new(move |state| {
            let (result, next_state) = previous(state);
            (function(result), next_state)
        })
    }

    /// Sequences this computation into a function producing the next one.
    ///
    /// The state produced by this computation feeds the next.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// // First: (10, 11), then with state 11: (10 + 11, 22)
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let previous = self.transition;
        State::new(move |state| {
            let (result, intermediate_state) = previous(state);
            function(result).run(intermediate_state)
        })
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let sequenced = State::<i32, ()>::modify(|s| s + 10).then(State::get());
    /// assert_eq!(sequenced.run(32), (42, 42));
    /// ```
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two computations with a binary function, running this one
    /// first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let second: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// // first: (10, 11), second with 11: (22, 12)
    /// assert_eq!(first.map2(second, |a, b| a + b).run(10), (32, 12));
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        State::new(move |state| {
            let (result_a, intermediate_state) = first(state);
            let (result_b, final_state) = second(intermediate_state);
            (function(result_a, result_b), final_state)
        })
    }

    /// Pairs the results of two computations, running this one first.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Projects a value out of the current state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// #[derive(Clone)]
    /// struct Session { edits: usize }
    ///
    /// let state: State<Session, usize> = State::gets(|session: &Session| session.edits);
    /// assert_eq!(state.eval(Session { edits: 3 }), 3);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }

    /// Threads an accumulator through a sequence with a stateful step.
    ///
    /// The stateful counterpart of
    /// [`fold_effectful`](crate::typeclass::combinator::fold_effectful):
    /// every item is visited (State never short-circuits) and the state
    /// flows through each step in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// // Sums items while counting the steps in the state.
    /// let fold: State<u32, i32> = State::fold_effectful(
    ///     |total, item: i32| State::modify(|steps: u32| steps + 1).then(State::pure(total + item)),
    ///     0,
    ///     vec![1, 2, 3],
    /// );
    /// assert_eq!(fold.run(0), (6, 3));
    /// ```
    pub fn fold_effectful<T, I, F>(function: F, seed: A, items: I) -> Self
    where
        A: Clone,
        T: Clone + 'static,
        I: IntoIterator<Item = T>,
        F: Fn(A, T) -> Self + 'static,
    {
        let function = Rc::new(function);
        let mut accumulated = Self::pure(seed);
        for item in items {
            let step = Rc::clone(&function);
            accumulated = accumulated.flat_map(move |value| step(value, item.clone()));
        }
        accumulated
    }
}

// =============================================================================
// MonadState Operations
// =============================================================================

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Returns the current state as the result, without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// assert_eq!(state.run(42), (42, 42));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the current state, producing `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, ()> = State::put(100);
    /// assert_eq!(state.exec(42), 100);
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Transforms the current state with a function, producing `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let state: State<i32, ()> = State::modify(|x| x * 2);
    /// assert_eq!(state.exec(21), 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}
