use shared::{
    catalog::{self, Catalog},
    domain::{BookingForm, MenuItem, PageId},
    view::{
        ButtonView, FormField, ImageSource, InputKind, InputView, MenuCard, NavBar, NavItemView,
        PageContent, UiAction, ViewDescriptor,
    },
};

/// Maps state to a descriptor. Pure: identical inputs give identical output.
pub fn render(page: &PageId, form: &BookingForm, catalog: &Catalog) -> ViewDescriptor {
    ViewDescriptor {
        page: page.clone(),
        nav: render_nav(page, catalog),
        content: render_content(page, form, catalog),
    }
}

fn render_nav(page: &PageId, catalog: &Catalog) -> NavBar {
    NavBar {
        brand: catalog::BRAND_NAME.to_string(),
        items: catalog
            .nav
            .iter()
            .map(|entry| NavItemView {
                label: entry.label.clone(),
                page: entry.page.clone(),
                active: entry.page == *page,
                on_click: UiAction::Navigate {
                    page: entry.page.clone(),
                },
            })
            .collect(),
    }
}

fn render_content(page: &PageId, form: &BookingForm, catalog: &Catalog) -> PageContent {
    match page {
        PageId::Home => PageContent::MenuGallery {
            title: catalog::MENU_TITLE.to_string(),
            cards: catalog.menu.iter().map(menu_card).collect(),
        },
        PageId::BookTable => PageContent::BookingForm {
            title: catalog::BOOKING_TITLE.to_string(),
            party_size: InputView {
                field: FormField::PartySize,
                label: catalog::PARTY_SIZE_LABEL.to_string(),
                kind: InputKind::Number {
                    min: BookingForm::MIN_PARTY_SIZE,
                },
                value: form.party_size.to_string(),
            },
            preferred_time: InputView {
                field: FormField::PreferredTime,
                label: catalog::PREFERRED_TIME_LABEL.to_string(),
                kind: InputKind::Time,
                value: form.preferred_time.clone(),
            },
            submit: ButtonView {
                label: catalog::SUBMIT_LABEL.to_string(),
                on_click: UiAction::SubmitBooking,
            },
        },
        PageId::Contact => PageContent::Contact {
            title: catalog::CONTACT_TITLE.to_string(),
            body: catalog::CONTACT_BODY.to_string(),
        },
        PageId::Unknown(_) => PageContent::NotFound {
            title: catalog::NOT_FOUND_TITLE.to_string(),
            body: catalog::NOT_FOUND_BODY.to_string(),
        },
    }
}

fn menu_card(item: &MenuItem) -> MenuCard {
    MenuCard {
        item_id: item.id,
        name: item.name.clone(),
        description: item.description.clone(),
        image: ImageSource {
            primary: item.image_url.clone(),
            fallback: catalog::IMAGE_FALLBACK_URL.to_string(),
            alt: item.name.clone(),
        },
    }
}
