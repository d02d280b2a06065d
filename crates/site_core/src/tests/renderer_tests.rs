use super::*;
use shared::{
    catalog::{self, Catalog},
    domain::{BookingForm, MenuItemId, PageId},
    view::{FormField, InputKind, PageContent, UiAction},
};

#[test]
fn home_renders_menu_cards_in_static_order() {
    let view = render(&PageId::Home, &BookingForm::default(), &Catalog::default());

    let PageContent::MenuGallery { title, cards } = &view.content else {
        panic!("expected menu gallery, got {:?}", view.content);
    };
    assert_eq!(title, "Our Delicious Menu");
    let ids: Vec<MenuItemId> = cards.iter().map(|card| card.item_id).collect();
    assert_eq!(ids, vec![MenuItemId(1), MenuItemId(2), MenuItemId(3)]);
    assert_eq!(cards[0].name, "Spicy Chicken Noodles");
    for card in cards {
        assert_eq!(card.image.fallback, catalog::IMAGE_FALLBACK_URL);
        assert_eq!(card.image.alt, card.name);
        assert_ne!(card.image.primary, card.image.fallback);
    }
}

#[test]
fn rendering_is_idempotent() {
    let catalog = Catalog::default();
    let form = BookingForm::default();
    let first = render(&PageId::Home, &form, &catalog);
    let second = render(&PageId::Home, &form, &catalog);
    assert_eq!(first, second);
}

#[test]
fn book_table_renders_bound_form_and_marks_nav_active() {
    let mut controller = ViewController::new(TracingNotifier);
    controller.navigate_to("book-table");
    controller.set_party_size("6");
    controller.set_preferred_time("19:45");

    let view = controller.render();
    assert_eq!(view.page, PageId::BookTable);
    let active = view.nav.active_item().expect("one active entry");
    assert_eq!(active.label, "Book a Table");
    assert_eq!(view.nav.items.iter().filter(|item| item.active).count(), 1);

    let PageContent::BookingForm {
        title,
        party_size,
        preferred_time,
        submit,
    } = &view.content
    else {
        panic!("expected booking form, got {:?}", view.content);
    };
    assert_eq!(title, "Book Your Table");
    assert_eq!(party_size.field, FormField::PartySize);
    assert_eq!(party_size.kind, InputKind::Number { min: 1 });
    assert_eq!(party_size.value, "6");
    assert_eq!(preferred_time.field, FormField::PreferredTime);
    assert_eq!(preferred_time.kind, InputKind::Time);
    assert_eq!(preferred_time.value, "19:45");
    assert_eq!(submit.label, "Book Now");
    assert_eq!(submit.on_click, UiAction::SubmitBooking);
}

#[test]
fn contact_page_is_static() {
    let catalog = Catalog::default();
    let empty = render(&PageId::Contact, &BookingForm::default(), &catalog);
    let filled = render(
        &PageId::Contact,
        &BookingForm {
            party_size: 9,
            preferred_time: "21:00".to_string(),
        },
        &catalog,
    );
    assert_eq!(empty, filled);
    assert_eq!(empty.content.title(), "Contact Us");
    assert_eq!(empty.nav.active_item().map(|item| item.label.as_str()), Some("Contact"));
}

#[test]
fn unknown_page_renders_not_found_without_active_nav() {
    let mut controller = ViewController::new(TracingNotifier);
    controller.navigate_to("nonexistent");
    let view = controller.render();

    assert!(matches!(view.content, PageContent::NotFound { .. }));
    assert_eq!(view.content.title(), "Page Not Found");
    assert!(view.nav.active_item().is_none());
    assert_eq!(view.nav.items.len(), 3);
}

#[test]
fn nav_entries_carry_navigate_hooks() {
    let view = render(&PageId::Home, &BookingForm::default(), &Catalog::default());
    assert_eq!(view.nav.brand, "TheLittleLemon Restaurant");
    for item in &view.nav.items {
        assert_eq!(
            item.on_click,
            UiAction::Navigate {
                page: item.page.clone()
            }
        );
    }
}

#[test]
fn form_field_hooks_build_change_actions() {
    assert_eq!(
        FormField::PartySize.on_change("3"),
        UiAction::SetPartySize {
            raw: "3".to_string()
        }
    );
    assert_eq!(
        FormField::PreferredTime.on_change("08:00"),
        UiAction::SetPreferredTime {
            raw: "08:00".to_string()
        }
    );
}

#[test]
fn descriptor_serializes_with_tagged_content() {
    let mut controller = ViewController::new(TracingNotifier);
    controller.navigate_to("book-table");
    let json = serde_json::to_value(controller.render()).expect("serialize");

    assert_eq!(json["page"], "book-table");
    assert_eq!(json["content"]["type"], "booking_form");
    assert_eq!(json["content"]["payload"]["party_size"]["value"], "1");
    assert_eq!(json["nav"]["items"][1]["on_click"]["type"], "navigate");
    assert_eq!(json["nav"]["items"][1]["on_click"]["payload"]["page"], "book-table");
}
