//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Actions are queued and picked up by the store after the
//! action currently being processed, so dispatch never recurses into the store.
//!
//! The dispatcher also counts requests that are still in flight. A request task settles
//! its [`InFlight`] guard by queuing its terminal action as [`Envelope::Settled`]; the
//! store lowers the count only when it takes that envelope off the queue. The count
//! therefore never reaches zero while a terminal action is still on its way.

use crate::actions::Action;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// What travels on the store's queue
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// An action to run through the middleware chain
    Action(Action),
    /// A request finished; carries its terminal action, if it produced one
    Settled(Option<Action>),
}

/// Dispatcher for sending actions back through the middleware chain
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Envelope>,
    in_flight: Arc<AtomicUsize>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: UnboundedSender<Envelope>) -> Self {
        Self {
            action_tx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        self.send(Envelope::Action(action));
    }

    /// Mark a request as in flight until its guard is settled or dropped
    pub fn begin_request(&self) -> InFlight {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        InFlight {
            dispatcher: Some(self.clone()),
        }
    }

    /// Number of requests whose settlement the store has not taken yet
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Called by the store for every `Envelope::Settled` it receives
    pub(crate) fn finish_request(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    fn send(&self, envelope: Envelope) {
        if let Err(e) = self.action_tx.send(envelope) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

/// Guard for one in-flight request
///
/// Dropping it without calling [`InFlight::settle`] (the request task panicked or
/// was cancelled) still settles the request, with no terminal action.
#[derive(Debug)]
pub struct InFlight {
    dispatcher: Option<Dispatcher>,
}

impl InFlight {
    /// Queue the request's terminal action and release the request
    pub fn settle(mut self, action: Action) {
        if let Some(dispatcher) = self.dispatcher.take() {
            dispatcher.send(Envelope::Settled(Some(action)));
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(dispatcher) = self.dispatcher.take() {
            log::warn!("Dispatcher: request ended without a terminal action");
            dispatcher.send(Envelope::Settled(None));
        }
    }
}
