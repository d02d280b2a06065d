use shared::error::Notice;
use tracing::info;

mod controller;
pub mod image;
mod renderer;

pub use controller::{BookingReceipt, ViewController};
pub use image::ImageSlot;
pub use renderer::render;

/// Outbound side-channel for booking outcomes.
///
/// Calls are fire-and-forget; implementations must not call back into the controller.
pub trait Notifier {
    /// Show a message to the user (modal, toast, console line...).
    fn notify(&self, notice: &Notice);
    /// Emit a diagnostic log line.
    fn record_diagnostic(&self, line: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }

    fn record_diagnostic(&self, line: &str) {
        (**self).record_diagnostic(line);
    }
}

/// Routes confirmations and diagnostics into `tracing`.
///
/// Validation notices are never logged; callers see them through the `BookingError`
/// returned by `ViewController::submit_booking`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        if !notice.is_error() {
            info!(kind = ?notice.kind, "{}", notice.message);
        }
    }

    fn record_diagnostic(&self, line: &str) {
        info!(target: "booking", "{line}");
    }
}

/// Lenient integer parse for the party-size field.
///
/// Leading whitespace and an optional sign are accepted, then the leading run of digits is
/// read and anything after it ignored ("12 people" -> 12). No digits, or a value below one,
/// yields one. Values past `u64::MAX` saturate.
pub fn parse_party_size(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return shared::domain::BookingForm::MIN_PARTY_SIZE;
    }

    let value = rest[..digits_len].bytes().fold(0u64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'))
    });
    value.max(shared::domain::BookingForm::MIN_PARTY_SIZE)
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod renderer_tests;
