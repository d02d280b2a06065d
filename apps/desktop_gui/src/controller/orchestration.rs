//! Helpers from UI actions to the controller and the backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::view::UiAction;
use site_core::{Notifier, ViewController};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Image queue is full; some pictures may not load".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Image worker stopped; menu pictures are unavailable".to_string();
            false
        }
    }
}

/// Applies every action collected during a frame, in order.
pub fn apply_ui_actions<N: Notifier>(
    controller: &mut ViewController<N>,
    actions: Vec<UiAction>,
) {
    for action in actions {
        // Rejected bookings surface through the notifier only.
        let _ = controller.dispatch(action);
    }
}
