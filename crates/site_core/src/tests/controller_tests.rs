use super::*;
use shared::{
    domain::PageId,
    error::{BookingError, Notice, NoticeKind},
    view::UiAction,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
    diagnostics: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notices lock").clone()
    }

    fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.lock().expect("diagnostics lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices
            .lock()
            .expect("notices lock")
            .push(notice.clone());
    }

    fn record_diagnostic(&self, line: &str) {
        self.diagnostics
            .lock()
            .expect("diagnostics lock")
            .push(line.to_string());
    }
}

fn controller() -> (ViewController<RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    (ViewController::new(notifier.clone()), notifier)
}

#[test]
fn starts_on_home_with_default_form() {
    let (controller, _) = controller();
    assert_eq!(controller.current_page(), &PageId::Home);
    assert_eq!(controller.form().party_size, 1);
    assert_eq!(controller.form().preferred_time, "");
}

#[test]
fn party_size_is_clamped_to_at_least_one() {
    let (mut controller, _) = controller();
    for (raw, expected) in [
        ("5", 5),
        ("1", 1),
        ("0", 1),
        ("-3", 1),
        ("250", 250),
    ] {
        controller.set_party_size(raw);
        assert_eq!(controller.form().party_size, expected, "raw input {raw:?}");
    }
}

#[test]
fn non_numeric_party_size_becomes_one() {
    let (mut controller, _) = controller();
    controller.set_party_size("6");
    controller.set_party_size("not-a-number");
    assert_eq!(controller.form().party_size, 1);
    controller.set_party_size("");
    assert_eq!(controller.form().party_size, 1);
}

#[test]
fn party_size_parse_reads_leading_digits() {
    assert_eq!(parse_party_size("  7"), 7);
    assert_eq!(parse_party_size("12 people"), 12);
    assert_eq!(parse_party_size("4.9"), 4);
    assert_eq!(parse_party_size("+3"), 3);
    assert_eq!(parse_party_size("-0"), 1);
    assert_eq!(parse_party_size("99999999999999999999999"), u64::MAX);
}

#[test]
fn preferred_time_is_stored_verbatim() {
    let (mut controller, _) = controller();
    controller.set_preferred_time("whenever works");
    assert_eq!(controller.form().preferred_time, "whenever works");
    controller.set_preferred_time("");
    assert_eq!(controller.form().preferred_time, "");
}

#[test]
fn successful_booking_notifies_logs_and_resets() {
    let (mut controller, notifier) = controller();
    controller.set_party_size("4");
    controller.set_preferred_time("18:30");

    let receipt = controller.submit_booking().expect("booking accepted");
    assert_eq!(receipt.party_size, 4);
    assert_eq!(receipt.preferred_time, "18:30");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::BookingConfirmed);
    assert!(notices[0].message.contains('4'));
    assert!(notices[0].message.contains("18:30"));
    assert_eq!(
        notices[0].message,
        "Booking confirmed for 4 people at 18:30. Thank you!"
    );
    assert_eq!(
        notifier.diagnostics(),
        vec!["Booking details: 4 people, Time: 18:30".to_string()]
    );

    assert_eq!(controller.form().party_size, 1);
    assert_eq!(controller.form().preferred_time, "");
}

#[test]
fn booking_without_time_is_rejected_without_state_change() {
    let (mut controller, notifier) = controller();
    controller.set_party_size("3");

    let err = controller.submit_booking().expect_err("missing time");
    assert_eq!(
        err,
        BookingError::Incomplete {
            party_size: 3,
            preferred_time: String::new(),
        }
    );

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Validation);
    assert_eq!(
        notices[0].message,
        "Please enter a valid number of people and a time."
    );
    assert!(notifier.diagnostics().is_empty());
    assert_eq!(controller.form().party_size, 3);
    assert_eq!(controller.form().preferred_time, "");
}

#[test]
fn each_submit_is_one_shot() {
    let (mut controller, notifier) = controller();
    controller.set_preferred_time("19:00");
    assert!(controller.submit_booking().is_ok());
    assert!(controller.submit_booking().is_err());

    let kinds: Vec<NoticeKind> = notifier.notices().iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![NoticeKind::BookingConfirmed, NoticeKind::Validation]
    );
    assert_eq!(notifier.diagnostics().len(), 1);
}

#[test]
fn navigation_accepts_unknown_ids() {
    let (mut controller, _) = controller();
    controller.navigate_to("nonexistent");
    assert_eq!(
        controller.current_page(),
        &PageId::Unknown("nonexistent".to_string())
    );
    controller.navigate_to(PageId::Contact);
    assert_eq!(controller.current_page(), &PageId::Contact);
}

#[test]
fn navigation_keeps_form_state() {
    let (mut controller, _) = controller();
    controller.set_party_size("8");
    controller.navigate_to("contact");
    controller.navigate_to("book-table");
    assert_eq!(controller.form().party_size, 8);
}

#[test]
fn dispatch_routes_action_hooks() {
    let (mut controller, notifier) = controller();
    assert!(controller
        .dispatch(UiAction::Navigate {
            page: PageId::BookTable
        })
        .is_none());
    controller.dispatch(UiAction::SetPartySize {
        raw: "2".to_string(),
    });
    controller.dispatch(UiAction::SetPreferredTime {
        raw: "12:15".to_string(),
    });

    let outcome = controller
        .dispatch(UiAction::SubmitBooking)
        .expect("submit reports an outcome");
    assert_eq!(outcome.expect("accepted").party_size, 2);
    assert_eq!(controller.current_page(), &PageId::BookTable);
    assert_eq!(notifier.notices().len(), 1);
}

#[test]
fn borrowed_notifier_can_be_used() {
    let notifier = RecordingNotifier::default();
    let mut controller = ViewController::new(&notifier);
    controller.set_preferred_time("20:00");
    controller.submit_booking().expect("accepted");
    assert_eq!(notifier.notices().len(), 1);
}
