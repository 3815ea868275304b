use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::day_sheet::{today_date_key, DaySheet};

pub struct AppState {
    pub catalog: Signal<Catalog>,
    pub sheet: Signal<DaySheet>,
    pub active_category: Signal<Option<String>>,
    pub search: Signal<String>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: use_signal(Catalog::default),
            sheet: use_signal(|| DaySheet::empty_for(&today_date_key())),
            active_category: use_signal(|| None::<String>),
            search: use_signal(String::new),
            busy: use_signal(|| false),
            status: use_signal(|| "Pronto".to_string()),
        }
    }
}
