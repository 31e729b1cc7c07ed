//! Shared builders for repository integration tests.
#![allow(dead_code)]

use marquee_core::types::Timestamp;
use marquee_db::models::page::CreatePage;
use marquee_db::models::widget::{CreateWidget, WidgetPayload};

pub fn new_page(name: &str, slug: Option<&str>) -> CreatePage {
    CreatePage {
        name: name.to_string(),
        slug: slug.map(str::to_string),
        draft: None,
        background_gradient: None,
        background_start_color: None,
        background_end_color: None,
        text_color: None,
        button_color: None,
        button_text_color: None,
        nav_bar_color: None,
        nav_bar_text_color: None,
    }
}

pub fn text_widget(name: &str, content: &str) -> CreateWidget {
    CreateWidget {
        name: name.to_string(),
        width: None,
        start_date: None,
        end_date: None,
        payload: WidgetPayload::Text {
            content: content.to_string(),
            text_color: None,
        },
    }
}

pub fn windowed_text_widget(
    name: &str,
    content: &str,
    start_date: Option<Timestamp>,
    end_date: Option<Timestamp>,
) -> CreateWidget {
    CreateWidget {
        name: name.to_string(),
        width: None,
        start_date,
        end_date,
        payload: WidgetPayload::Text {
            content: content.to_string(),
            text_color: None,
        },
    }
}
