use crossbeam_channel::Sender;
use shared::error::Notice;
use site_core::Notifier;

use crate::controller::events::UiEvent;

/// Queues notices for the modal dialog; diagnostics go to the log.
#[derive(Clone)]
pub struct GuiNotifier {
    ui_tx: Sender<UiEvent>,
}

impl GuiNotifier {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }
}

impl Notifier for GuiNotifier {
    fn notify(&self, notice: &Notice) {
        if self.ui_tx.try_send(UiEvent::Notice(notice.clone())).is_err() {
            tracing::warn!(kind = ?notice.kind, "dropped notice: {}", notice.message);
        }
    }

    fn record_diagnostic(&self, line: &str) {
        tracing::info!(target: "booking", "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::error::NoticeKind;

    #[test]
    fn forwards_notices_to_ui_queue() {
        let (tx, rx) = bounded(4);
        let notifier = GuiNotifier::new(tx);
        notifier.notify(&Notice::new(NoticeKind::Validation, "missing time"));

        match rx.try_recv() {
            Ok(UiEvent::Notice(notice)) => assert_eq!(notice.message, "missing time"),
            _ => panic!("expected a queued notice"),
        }
        notifier.record_diagnostic("not queued");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn full_queue_drops_without_panicking() {
        let (tx, _rx) = bounded(0);
        let notifier = GuiNotifier::new(tx);
        notifier.notify(&Notice::new(NoticeKind::BookingConfirmed, "ok"));
    }
}
