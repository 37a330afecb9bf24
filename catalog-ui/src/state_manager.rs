use catalog_core::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::wasm_utils;

/// How long a toast stays on screen, in seconds of UI time.
pub const TOAST_SECONDS: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: f64,
}

/// Glue between the egui frame loop and the catalog.
///
/// Actions are handled synchronously on the UI thread. Any request they produce is
/// spawned with its own clone of the client, and the outcome comes back over a
/// channel that [`update_from_async`](Self::update_from_async) drains once per
/// frame. Responses are applied in arrival order, so the last one wins.
pub struct CatalogStateManager {
    state: CatalogState,
    api: HttpProductApi,
    notifications: NotificationLog,
    toasts: Vec<Toast>,

    // Async state bridge
    outcome_tx: UnboundedSender<Outcome>,
    outcome_rx: UnboundedReceiver<Outcome>,

    load_requested: bool,
}

impl CatalogStateManager {
    pub fn new(config: CatalogConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            state: CatalogState::new(),
            api: HttpProductApi::new(config),
            notifications: NotificationLog::new(),
            toasts: Vec::new(),
            outcome_tx,
            outcome_rx,
            load_requested: false,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Starts the first full load, once.
    pub fn ensure_loaded(&mut self) {
        if self.load_requested {
            return;
        }
        self.load_requested = true;
        self.dispatch(CatalogAction::LoadAll);
    }

    pub fn dispatch(&mut self, action: CatalogAction) {
        let effect = self.state.handle(action, &self.notifications);
        self.spawn(effect);
    }

    fn spawn(&self, effect: Option<Effect>) {
        let Some(effect) = effect else {
            return;
        };

        log::info!("Sending {}", effect.description());
        let api = self.api.clone();
        let outcome_tx = self.outcome_tx.clone();

        wasm_utils::spawn_async(async move {
            let outcome = effect.execute(&api).await;
            if outcome_tx.send(outcome).is_err() {
                log::warn!("Catalog closed before a response arrived");
            }
        });
    }

    /// Applies every finished request and turns new notifications into toasts.
    /// `now` is the UI clock in seconds.
    pub fn update_from_async(&mut self, now: f64) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            let follow_up = self.state.apply(outcome, &self.notifications);
            self.spawn(follow_up);
        }

        for notification in self.notifications.drain() {
            self.toasts.push(Toast {
                notification,
                expires_at: now + TOAST_SECONDS,
            });
        }
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::from_state(&self.state)
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss_toast(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> CatalogStateManager {
        CatalogStateManager::new(CatalogConfig::new("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn test_rejected_form_becomes_toast() {
        let mut manager = manager();
        manager.dispatch(CatalogAction::OpenCreate);
        manager.dispatch(CatalogAction::SubmitForm);

        manager.update_from_async(10.0);
        let toasts = manager.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(
            toasts[0].notification.message,
            "Please fill in all required fields."
        );
        assert_eq!(toasts[0].expires_at, 10.0 + TOAST_SECONDS);

        manager.update_from_async(10.0 + TOAST_SECONDS);
        assert!(manager.toasts().is_empty());
    }

    #[test]
    fn test_outcomes_from_channel_are_applied() {
        let mut manager = manager();
        manager
            .outcome_tx
            .send(Outcome::Loaded(Ok(vec![
                Product::new(2, "Item 10"),
                Product::new(1, "Item 9"),
            ])))
            .unwrap();

        manager.update_from_async(0.0);

        let view = manager.view();
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].title, "Item 9");
        assert!(manager.toasts().is_empty());
    }

    #[test]
    fn test_dismiss_toast() {
        let mut manager = manager();
        manager.dispatch(CatalogAction::OpenCreate);
        manager.dispatch(CatalogAction::SetCodeInput("0".to_string()));
        manager.dispatch(CatalogAction::SetDescriptionInput("Zero".to_string()));
        manager.dispatch(CatalogAction::SubmitForm);
        manager.update_from_async(1.0);
        assert_eq!(manager.toasts().len(), 1);

        manager.dismiss_toast(5);
        assert_eq!(manager.toasts().len(), 1);
        manager.dismiss_toast(0);
        assert!(manager.toasts().is_empty());
    }
}
