use crate::constants::{LOCALE_QUERY_PARAM, LOCALE_STORAGE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    ZhTw,
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Self; 3] = [Self::ZhTw, Self::Ja, Self::En];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZhTw => "zh-TW",
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Name of the language in that language, for the switcher menu
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::ZhTw => "繁體中文",
            Self::Ja => "日本語",
            Self::En => "English",
        }
    }

    /// Match a BCP 47 tag on its primary language subtag
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Some(Self::ZhTw),
            "ja" => Some(Self::Ja),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

/// Pick the locale from, in order: query string, stored choice, browser language
#[must_use]
pub fn resolve_locale(query: Option<&str>, stored: Option<&str>, navigator: Option<&str>) -> Locale {
    [query, stored, navigator]
        .into_iter()
        .flatten()
        .find_map(Locale::from_code)
        .unwrap_or_default()
}

/// Look up a UI string; unknown keys fall back to zh-TW, then to the key itself
#[must_use]
pub fn t(key: &str, locale: Locale) -> &str {
    let entry = match locale {
        Locale::ZhTw => zh_tw(key),
        Locale::Ja => ja(key),
        Locale::En => en(key),
    };
    entry.or_else(|| zh_tw(key)).unwrap_or(key)
}

fn zh_tw(key: &str) -> Option<&'static str> {
    Some(match key {
        "app.title" => "Travel Pocket",
        "home.subtitle" => "輕鬆管理你的旅程。",
        "home.your_trips" => "你的旅程",
        "home.loading" => "載入旅程中...",
        "home.view_itinerary" => "查看行程",
        "common.loading" => "載入中...",
        "common.error" => "錯誤",
        "common.back" => "返回",
        "tabs.schedule" => "行程",
        "tabs.shops" => "店舖",
        "tabs.info" => "資訊",
        "trip.not_found" => "找不到此旅程",
        "schedule.loading" => "載入行程中...",
        "schedule.empty" => "這天沒有安排行程",
        "schedule.gap" => "交通 / 自由時間",
        "schedule.time" => "時間",
        "schedule.date" => "日期",
        "schedule.location" => "地點",
        "schedule.description" => "說明",
        "schedule.close" => "關閉",
        "shops.all" => "全部",
        "shops.empty" => "此分類沒有店舖。",
        "info.title" => "資訊",
        "info.loading" => "載入資訊中...",
        "info.reading" => "閱讀",
        "theme.toggle" => "切換深色模式",
        "language.change" => "切換語言",
        _ => return None,
    })
}

fn ja(key: &str) -> Option<&'static str> {
    Some(match key {
        "home.subtitle" => "旅をもっと手軽に。",
        "home.your_trips" => "あなたの旅",
        "home.loading" => "旅程を読み込み中...",
        "home.view_itinerary" => "旅程を見る",
        "common.loading" => "読み込み中...",
        "common.error" => "エラー",
        "common.back" => "戻る",
        "tabs.schedule" => "旅程",
        "tabs.shops" => "お店",
        "tabs.info" => "情報",
        "trip.not_found" => "旅行が見つかりません",
        "schedule.loading" => "旅程を読み込み中...",
        "schedule.empty" => "この日の予定はありません",
        "schedule.gap" => "移動 / 自由時間",
        "schedule.time" => "時間",
        "schedule.date" => "日付",
        "schedule.location" => "場所",
        "schedule.description" => "説明",
        "schedule.close" => "閉じる",
        "shops.all" => "すべて",
        "shops.empty" => "このカテゴリのお店はありません。",
        "info.title" => "情報",
        "info.loading" => "情報を読み込み中...",
        "info.reading" => "読む",
        "theme.toggle" => "ダークモード切替",
        "language.change" => "言語を変更",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "app.title" => "Travel Pocket",
        "home.subtitle" => "Manage your journeys with ease.",
        "home.your_trips" => "Your Trips",
        "home.loading" => "Loading trips...",
        "home.view_itinerary" => "View Itinerary",
        "common.loading" => "Loading...",
        "common.error" => "Error",
        "common.back" => "Back",
        "tabs.schedule" => "Schedule",
        "tabs.shops" => "Shops",
        "tabs.info" => "Info",
        "trip.not_found" => "Trip not found",
        "schedule.loading" => "Loading schedule...",
        "schedule.empty" => "Nothing planned for this day",
        "schedule.gap" => "transit / free time",
        "schedule.time" => "Time",
        "schedule.date" => "Date",
        "schedule.location" => "Location",
        "schedule.description" => "Description",
        "schedule.close" => "Close",
        "shops.all" => "All",
        "shops.empty" => "No shops found for this category.",
        "info.title" => "Info",
        "info.loading" => "Loading info...",
        "info.reading" => "Reading",
        "theme.toggle" => "Toggle dark mode",
        "language.change" => "Change Language",
        _ => return None,
    })
}

/// Locale for this page load, read from the URL, `localStorage` and `navigator`
#[must_use]
pub fn detect_locale() -> Locale {
    let Some(window) = web_sys::window() else {
        return Locale::default();
    };

    let query = window
        .location()
        .search()
        .ok()
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(LOCALE_QUERY_PARAM));
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten());
    let navigator = window.navigator().language();

    resolve_locale(query.as_deref(), stored.as_deref(), navigator.as_deref())
}

pub fn persist_locale(locale: Locale) {
    let Some(window) = web_sys::window() else { return };
    let Ok(Some(storage)) = window.local_storage() else { return };

    if storage.set_item(LOCALE_STORAGE_KEY, locale.code()).is_err() {
        leptos::logging::warn!("Failed to persist locale {}", locale.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_matches_primary_subtag() {
        assert_eq!(Locale::from_code("zh-TW"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_code("zh_Hant"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_code("JA-jp"), Some(Locale::Ja));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_resolve_locale_order() {
        assert_eq!(resolve_locale(Some("ja"), Some("en"), Some("zh-TW")), Locale::Ja);
        assert_eq!(resolve_locale(None, Some("en"), Some("ja")), Locale::En);
        assert_eq!(resolve_locale(Some("xx"), None, Some("ja-JP")), Locale::Ja);
        assert_eq!(resolve_locale(None, None, Some("de-DE")), Locale::ZhTw);
        assert_eq!(resolve_locale(None, None, None), Locale::ZhTw);
    }

    #[test]
    fn test_lookup_and_fallbacks() {
        assert_eq!(t("tabs.schedule", Locale::En), "Schedule");
        assert_eq!(t("tabs.schedule", Locale::ZhTw), "行程");
        // Japanese table has no app title, falls back to zh-TW
        assert_eq!(t("app.title", Locale::Ja), "Travel Pocket");
        assert_eq!(t("no.such.key", Locale::En), "no.such.key");
    }

    #[test]
    fn test_every_locale_has_distinct_code() {
        let codes: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["zh-TW", "ja", "en"]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_persisted_locale_is_detected() {
        persist_locale(Locale::Ja);
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(LOCALE_STORAGE_KEY).ok().flatten());
        assert_eq!(stored.as_deref(), Some("ja"));
    }
}
