//! Plain-text rendering of the search overlay and the dashboard.

use laiks_weather::{Locale, Units};

use crate::models::weather_model::{LoadStatus, WeatherModel};
use crate::services::search_service::SearchState;

struct Labels {
    now: &'static str,
    today_at: &'static str,
    forecast: &'static str,
    loading: &'static str,
    searching: &'static str,
    no_results: &'static str,
    not_found: &'static str,
    not_found_hint: &'static str,
    current_location: &'static str,
}

const LV_LABELS: Labels = Labels {
    now: "Tagad",
    today_at: "Šodien plkst",
    forecast: "5 Dienu prognoze",
    loading: "Ielādē...",
    searching: "Meklē...",
    no_results: "Nekas netika atrasts",
    not_found: "Lapa nav atrasta",
    not_found_hint: "Mēģiniet meklēt citu vietu",
    current_location: "Pašreizējā atrašanās vieta",
};

const EN_LABELS: Labels = Labels {
    now: "Now",
    today_at: "Today at",
    forecast: "5 Day Forecast",
    loading: "Loading...",
    searching: "Searching...",
    no_results: "No results found",
    not_found: "Page not found",
    not_found_hint: "Try searching for another place",
    current_location: "Current location",
};

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Lv => &LV_LABELS,
        Locale::En => &EN_LABELS,
    }
}

/// Numbered result list, one `name` / `state country` pair per entry
pub fn render_search(state: &SearchState, locale: Locale) -> String {
    let labels = labels(locale);

    match state {
        SearchState::Idle => String::new(),
        SearchState::Typing(_) | SearchState::Searching(_) => format!("{}\n", labels.searching),
        SearchState::Empty => format!("{}\n", labels.no_results),
        SearchState::Failed(message) => format!("{}\n", message),
        SearchState::Results(list) => {
            let mut output = String::new();
            for (i, place) in list.iter().enumerate() {
                output.push_str(&format!(
                    "{:>2}. {}\n    {}\n",
                    i + 1,
                    place.name,
                    place.subtitle()
                ));
            }
            output
        }
    }
}

/// The whole dashboard: current card, hourly row and 5-day list
pub fn render_dashboard(model: &WeatherModel, units: Units, locale: Locale) -> String {
    let labels = labels(locale);
    let suffix = units.temperature_suffix();

    match &model.status {
        LoadStatus::Idle => return String::new(),
        LoadStatus::Loading if model.current.is_none() => return format!("{}\n", labels.loading),
        LoadStatus::NotFound => {
            return format!("{}\n{}\n", labels.not_found, labels.not_found_hint)
        }
        LoadStatus::Loading | LoadStatus::Ready | LoadStatus::Failed(_) => {}
    }

    let mut output = String::new();

    if let Some(card) = &model.current {
        output.push_str(&format!("{}\n", labels.now));
        output.push_str(&format!(
            "  {}{}  {} ({})\n",
            card.temperature, suffix, card.description, card.icon
        ));
        output.push_str(&format!("  {}\n", card.date_label));
        if let Some(location) = &card.location {
            output.push_str(&format!("  {}\n", location));
        }
        if model.current_location_active {
            output.push_str(&format!("  [{}]\n", labels.current_location));
        }
    }

    if !model.hourly.is_empty() {
        output.push_str(&format!("\n{}\n", labels.today_at));
        for item in &model.hourly {
            output.push_str(&format!(
                "  {:>5}  {:>4}{}  {}\n",
                item.time_label, item.temperature, suffix, item.description
            ));
        }
    }

    if !model.forecast.is_empty() {
        output.push_str(&format!("\n{}\n", labels.forecast));
        for day in &model.forecast {
            output.push_str(&format!(
                "  {:>4}{}  {:<12} {:<12} {}\n",
                day.temperature_max, suffix, day.day_month, day.weekday, day.description
            ));
        }
    }

    if model.is_loading() {
        output.push_str(&format!("\n{}\n", labels.loading));
    }

    if let Some(message) = model.error_message() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", message));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather_model::{CurrentCard, DailyItem, HourlyItem};
    use laiks_weather::{Coordinate, GeoResult};

    fn ready_model() -> WeatherModel {
        WeatherModel {
            status: LoadStatus::Ready,
            coordinate: Some(Coordinate::new(56.95, 24.1)),
            current: Some(CurrentCard {
                temperature: 12,
                description: "skaidrs".to_string(),
                icon: "01d".to_string(),
                date_label: "Pirmdiena 6, Maijs".to_string(),
                location: Some("Rīga, LV".to_string()),
            }),
            hourly: vec![HourlyItem {
                time_label: "3:00".to_string(),
                temperature: -4,
                icon: "13n".to_string(),
                description: "sniegs".to_string(),
            }],
            forecast: vec![DailyItem {
                temperature_max: 7,
                icon: "10d".to_string(),
                description: "lietus".to_string(),
                day_month: "6 Maijs".to_string(),
                weekday: "Pirmdiena".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_dashboard_sections() {
        let text = render_dashboard(&ready_model(), Units::Metric, Locale::Lv);
        assert!(text.starts_with("Tagad\n"));
        assert!(text.contains("12°C  skaidrs (01d)"));
        assert!(text.contains("Pirmdiena 6, Maijs"));
        assert!(text.contains("Rīga, LV"));
        assert!(text.contains("Šodien plkst"));
        assert!(text.contains("3:00"));
        assert!(text.contains("-4°C"));
        assert!(text.contains("5 Dienu prognoze"));
        assert!(text.contains("6 Maijs"));
        assert!(!text.contains("Ielādē"));
    }

    #[test]
    fn test_dashboard_english_imperial() {
        let text = render_dashboard(&ready_model(), Units::Imperial, Locale::En);
        assert!(text.contains("Now"));
        assert!(text.contains("12°F"));
        assert!(text.contains("5 Day Forecast"));
    }

    #[test]
    fn test_dashboard_marks_current_location() {
        let mut model = ready_model();
        model.current_location_active = true;
        let text = render_dashboard(&model, Units::Metric, Locale::En);
        assert!(text.contains("[Current location]"));
    }

    #[test]
    fn test_dashboard_panels() {
        let loading = WeatherModel {
            status: LoadStatus::Loading,
            ..Default::default()
        };
        assert_eq!(render_dashboard(&loading, Units::Metric, Locale::Lv), "Ielādē...\n");

        let failed = WeatherModel {
            status: LoadStatus::Failed("Request timed out".to_string()),
            ..Default::default()
        };
        assert_eq!(
            render_dashboard(&failed, Units::Metric, Locale::Lv),
            "Request timed out\n"
        );

        let missing = WeatherModel {
            status: LoadStatus::NotFound,
            ..Default::default()
        };
        assert!(render_dashboard(&missing, Units::Metric, Locale::En).starts_with("Page not found"));
        assert!(render_dashboard(&WeatherModel::default(), Units::Metric, Locale::En).is_empty());
    }

    #[test]
    fn test_partial_dashboard_shows_loading_footer() {
        let mut model = ready_model();
        model.status = LoadStatus::Loading;
        model.hourly.clear();
        model.forecast.clear();
        let text = render_dashboard(&model, Units::Metric, Locale::En);
        assert!(text.starts_with("Now\n"));
        assert!(text.ends_with("Loading...\n"));
    }

    #[test]
    fn test_failed_forecast_keeps_current_card() {
        let mut model = ready_model();
        model.status = LoadStatus::Failed("Request timed out".to_string());
        model.hourly.clear();
        model.forecast.clear();

        let text = render_dashboard(&model, Units::Metric, Locale::En);
        assert!(text.starts_with("Now
  12°C  skaidrs (01d)
"));
        assert!(text.ends_with("
Request timed out
"));
        assert!(!text.contains("5 Day Forecast"));
    }

    #[test]
    fn test_search_results() {
        let state = SearchState::Results(vec![
            GeoResult {
                name: "Rīga".to_string(),
                country: "LV".to_string(),
                state: Some("Rīga".to_string()),
                coordinate: Coordinate::new(56.95, 24.1),
            },
            GeoResult {
                name: "Riga".to_string(),
                country: "US".to_string(),
                state: None,
                coordinate: Coordinate::new(42.1, -84.2),
            },
        ]);
        let text = render_search(&state, Locale::Lv);
        assert_eq!(text, " 1. Rīga\n    Rīga LV\n 2. Riga\n    US\n");
    }

    #[test]
    fn test_search_other_states() {
        assert!(render_search(&SearchState::Idle, Locale::Lv).is_empty());
        assert_eq!(
            render_search(&SearchState::Searching("x".to_string()), Locale::Lv),
            "Meklē...\n"
        );
        assert_eq!(render_search(&SearchState::Empty, Locale::En), "No results found\n");
    }
}
