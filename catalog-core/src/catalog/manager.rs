use std::collections::VecDeque;

use super::{CatalogAction, CatalogState, Effect};
use crate::client::ProductApi;
use crate::notify::Notifier;

/// Headless driver: owns the state, the client and the notifier, and runs every
/// request inline.
///
/// The desktop app does not use this (it spawns requests and applies outcomes as
/// they arrive); it exists for scripts and tests.
pub struct CatalogManager<A, N> {
    // Current state - single source of truth
    state: CatalogState,

    api: A,
    notifier: N,

    // Action queue for sequential processing
    pending_actions: VecDeque<CatalogAction>,
}

impl<A: ProductApi, N: Notifier> CatalogManager<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            state: CatalogState::default(),
            api,
            notifier,
            pending_actions: VecDeque::new(),
        }
    }

    /// Queues an action; nothing happens until [`update`](Self::update).
    pub fn dispatch(&mut self, action: CatalogAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Processes one queued action, including any request chain it starts.
    pub async fn update(&mut self) {
        if let Some(action) = self.pending_actions.pop_front() {
            let effect = self.state.handle(action, &self.notifier);
            self.run(effect).await;
        }
    }

    /// Drains the queue.
    pub async fn run_until_idle(&mut self) {
        while !self.pending_actions.is_empty() {
            self.update().await;
        }
    }

    /// Handles `action` right away, skipping the queue.
    pub async fn perform(&mut self, action: CatalogAction) {
        let effect = self.state.handle(action, &self.notifier);
        self.run(effect).await;
    }

    /// Executes `effect` and every follow-up it produces.
    pub async fn run(&mut self, mut effect: Option<Effect>) {
        while let Some(current) = effect.take() {
            let outcome = current.execute(&self.api).await;
            effect = self.state.apply(outcome, &self.notifier);
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }
}
