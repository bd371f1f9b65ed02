use leptos::{create_effect, create_rw_signal, use_context, RwSignal, Signal, SignalGet, SignalGetUntracked, SignalSet};

use crate::api::DataSource;
use crate::i18n::{self, Locale};
use crate::models::Trip;
use crate::theme::{use_theme, ThemeContext};

/// Active UI language, provided at the app root
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    /// Detect the initial locale and keep the stored choice in sync
    #[must_use]
    pub fn detect() -> Self {
        let locale = create_rw_signal(i18n::detect_locale());
        create_effect(move |_| i18n::persist_locale(locale.get()));
        Self { locale }
    }

    /// Translate `key`; reactive when called inside a view closure
    #[must_use]
    pub fn t(self, key: &'static str) -> &'static str {
        i18n::t(key, self.locale.get())
    }

    #[must_use]
    pub fn t_untracked(self, key: &'static str) -> &'static str {
        i18n::t(key, self.locale.get_untracked())
    }

    pub fn set(self, locale: Locale) {
        self.locale.set(locale);
    }
}

/// Trip resolved by the trip shell and handed to its tab screens
#[derive(Debug, Clone, Copy)]
pub struct TripContext {
    pub trip: Signal<Option<Trip>>,
}

impl TripContext {
    #[must_use]
    pub fn trip_id(self) -> Option<String> {
        self.trip.get().map(|trip| trip.id)
    }
}

/// Where static trip documents are fetched from
#[derive(Debug, Clone)]
pub struct DataContext {
    pub source: DataSource,
}

/// Locale from context, or the default locale outside the app root
#[must_use]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_else(|| LocaleContext {
        locale: create_rw_signal(Locale::default()),
    })
}

/// Active trip from the trip shell; `None` outside a trip route
#[must_use]
pub fn use_trip() -> TripContext {
    use_context::<TripContext>().unwrap_or_else(|| TripContext {
        trip: Signal::derive(|| None),
    })
}

#[must_use]
pub fn use_data_source() -> DataSource {
    use_context::<DataContext>().map_or_else(DataSource::from_window_or_relative, |ctx| ctx.source)
}

#[must_use]
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(use_theme)
}
