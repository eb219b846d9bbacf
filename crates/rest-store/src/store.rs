use crate::actions::Action;
use crate::dispatcher::{Dispatcher, Envelope};
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Callback invoked with the new state after every reduction
pub type Listener = Box<dyn FnMut(&AppState) + Send>;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Store - holds application state and manages the Redux loop
///
/// The store is an owned value; there is no global instance. Actions queued
/// through the [`Dispatcher`] (by middleware or by request tasks) are processed
/// after the action currently being dispatched.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: UnboundedReceiver<Envelope>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Register a listener called with the new state after every reduction
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Process an action through middleware chain and reducer, then any
    /// actions the middleware queued meanwhile
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.drain();
    }

    /// Process queued actions until every request has settled and been reduced
    ///
    /// The in-flight count only drops when the store takes a request's
    /// settlement off the queue, so a non-zero count always means something
    /// is still coming.
    pub async fn run_until_idle(&mut self) {
        loop {
            self.drain();

            if self.dispatcher.in_flight() == 0 {
                break;
            }

            match self.action_rx.recv().await {
                Some(envelope) => self.receive(envelope),
                None => break,
            }
        }
    }

    fn receive(&mut self, envelope: Envelope) {
        match envelope {
            Envelope::Action(action) => self.process(action),
            Envelope::Settled(terminal) => {
                self.dispatcher.finish_request();
                if let Some(action) = terminal {
                    self.process(action);
                }
            }
        }
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(std::mem::take(&mut self.state), &action);
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
    }

    /// Process every action already queued on the dispatcher
    fn drain(&mut self) {
        while let Ok(envelope) = self.action_rx.try_recv() {
            self.receive(envelope);
        }
    }
}
