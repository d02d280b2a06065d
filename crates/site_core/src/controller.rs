//! Owner of page selection and booking-form state.

use shared::{
    catalog::Catalog,
    domain::{BookingForm, PageId},
    error::{BookingError, Notice, NoticeKind},
    view::{UiAction, ViewDescriptor},
};
use tracing::debug;

use crate::{parse_party_size, renderer::render, Notifier, TracingNotifier};

/// Snapshot of a booking that passed the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub party_size: u64,
    pub preferred_time: String,
}

impl BookingReceipt {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Booking confirmed for {} people at {}. Thank you!",
            self.party_size, self.preferred_time
        )
    }

    pub fn diagnostic_line(&self) -> String {
        format!(
            "Booking details: {} people, Time: {}",
            self.party_size, self.preferred_time
        )
    }
}

pub struct ViewController<N: Notifier = TracingNotifier> {
    current_page: PageId,
    form: BookingForm,
    catalog: Catalog,
    notifier: N,
}

impl Default for ViewController<TracingNotifier> {
    fn default() -> Self {
        Self::new(TracingNotifier)
    }
}

impl<N: Notifier> ViewController<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_catalog(notifier, Catalog::default())
    }

    pub fn with_catalog(notifier: N, catalog: Catalog) -> Self {
        Self {
            current_page: PageId::Home,
            form: BookingForm::default(),
            catalog,
            notifier,
        }
    }

    pub fn current_page(&self) -> &PageId {
        &self.current_page
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Accepts any id; unknown ones render the not-found page.
    pub fn navigate_to(&mut self, page: impl Into<PageId>) {
        let page = page.into();
        debug!(from = %self.current_page, to = %page, "navigate");
        self.current_page = page;
    }

    pub fn set_party_size(&mut self, raw: &str) {
        self.form.party_size = parse_party_size(raw);
    }

    pub fn set_preferred_time(&mut self, raw: &str) {
        self.form.preferred_time = raw.to_string();
    }

    /// Runs the booking guard once.
    ///
    /// On success the user is notified, a diagnostic line is recorded and the form resets.
    /// On failure only the validation notice is emitted and the form is left as it was.
    pub fn submit_booking(&mut self) -> Result<BookingReceipt, BookingError> {
        if !self.form.is_submittable() {
            let err = BookingError::Incomplete {
                party_size: self.form.party_size,
                preferred_time: self.form.preferred_time.clone(),
            };
            self.notifier.notify(&Notice::from(&err));
            return Err(err);
        }

        let receipt = BookingReceipt {
            party_size: self.form.party_size,
            preferred_time: self.form.preferred_time.clone(),
        };
        self.notifier.notify(&Notice::new(
            NoticeKind::BookingConfirmed,
            receipt.confirmation_message(),
        ));
        self.notifier.record_diagnostic(&receipt.diagnostic_line());
        self.form = BookingForm::default();
        Ok(receipt)
    }

    /// Applies an action hook taken from a rendered descriptor.
    pub fn dispatch(&mut self, action: UiAction) -> Option<Result<BookingReceipt, BookingError>> {
        match action {
            UiAction::Navigate { page } => self.navigate_to(page),
            UiAction::SetPartySize { raw } => self.set_party_size(&raw),
            UiAction::SetPreferredTime { raw } => self.set_preferred_time(&raw),
            UiAction::SubmitBooking => return Some(self.submit_booking()),
        }
        None
    }

    pub fn render(&self) -> ViewDescriptor {
        render(&self.current_page, &self.form, &self.catalog)
    }
}
