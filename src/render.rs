use chrono::DateTime;

use crate::icons::code_to_icon;
use crate::models::{Forecast, LocationQuery, TemperatureUnit};
use crate::surface::{CellHandle, ForecastSurface, SlotBinding};

/// Open-Meteo daily timestamps are local midnights; anchoring at local noon
/// keeps the date stable when the offset shifts within the window.
const MIDDAY_SECONDS: i64 = 12 * 3600;

/// Full weekday name of `timestamp` in the forecast location's timezone.
///
/// `utc_offset_seconds` is the offset the service reports for the whole
/// response, so midnights after a DST change are off by up to an hour from it.
pub fn weekday_label(timestamp: i64, utc_offset_seconds: i64) -> Option<String> {
    let local_noon = timestamp
        .checked_add(utc_offset_seconds)?
        .checked_add(MIDDAY_SECONDS)?;
    let local = DateTime::from_timestamp(local_noon, 0)?;
    Some(local.format("%A").to_string())
}

pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    format!("{:.1}\u{00b0}", unit.convert_celsius(celsius))
}

fn write<S: ForecastSurface + ?Sized>(surface: &mut S, cell: Option<&CellHandle>, text: &str) {
    if let Some(cell) = cell {
        surface.set_text(cell, text);
    }
}

/// Writes the location label of a slot.
pub fn render_label<S: ForecastSurface + ?Sized>(
    surface: &mut S,
    binding: &SlotBinding,
    location: &LocationQuery,
) {
    write(surface, binding.label.as_ref(), &location.label());
}

/// Writes up to five forecast days into the slot's rows. Unbound cells are skipped.
pub fn render<S: ForecastSurface + ?Sized>(
    surface: &mut S,
    binding: &SlotBinding,
    forecast: &Forecast,
    unit: TemperatureUnit,
) {
    tracing::debug!("Updating weather table for {}", binding.slot.id());

    for (row, day) in binding.rows.iter().zip(forecast.daily.days()) {
        if let Some(weekday) = weekday_label(day.time, forecast.utc_offset_seconds) {
            write(surface, row.weekday.as_ref(), &weekday);
        }

        // Missing values blank the cell so a new render never keeps stale text.
        let high = day.temperature_max.map(|c| format_temperature(c, unit));
        write(surface, row.high.as_ref(), high.as_deref().unwrap_or_default());
        let low = day.temperature_min.map(|c| format_temperature(c, unit));
        write(surface, row.low.as_ref(), low.as_deref().unwrap_or_default());
        let precipitation = day.precipitation_probability.map(|p| format!("{p}%"));
        write(
            surface,
            row.precipitation.as_ref(),
            precipitation.as_deref().unwrap_or_default(),
        );

        if let Some(cell) = &row.outlook {
            match day.weather_code {
                Some(code) => surface.set_icon(cell, code_to_icon(code)),
                None => surface.set_text(cell, ""),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyForecast;
    use crate::surface::{RenderSlot, TableView};

    // 2024-01-01 00:00 in America/Chicago (UTC-6), a Monday.
    const CHICAGO_MONDAY: i64 = 1_704_088_800;
    // 2024-01-01 00:00 in Asia/Tokyo (UTC+9), a Monday.
    const TOKYO_MONDAY: i64 = 1_704_034_800;

    fn some<T>(values: Vec<T>) -> Vec<Option<T>> {
        values.into_iter().map(Some).collect()
    }

    fn forecast(utc_offset_seconds: i64, start: i64) -> Forecast {
        Forecast {
            latitude: 30.27,
            longitude: -97.74,
            timezone: "America/Chicago".to_string(),
            utc_offset_seconds,
            daily: DailyForecast {
                time: (0..7).map(|d| start + d * 86_400).collect(),
                weather_code: some(vec![0, 3, 45, 61, 95, 71, 85]),
                temperature_2m_max: some(vec![0.0, 100.0, 21.26, -3.0, 30.0, 1.0, 2.0]),
                temperature_2m_min: some(vec![-10.0, 50.0, 12.0, -8.5, 20.0, 0.0, 0.0]),
                precipitation_probability_max: some(vec![0, 5, 20, 80, 100, 10, 10]),
            },
        }
    }

    #[test]
    fn test_weekday_uses_forecast_timezone() {
        assert_eq!(
            weekday_label(CHICAGO_MONDAY, -6 * 3600).as_deref(),
            Some("Monday")
        );
        assert_eq!(
            weekday_label(TOKYO_MONDAY, 9 * 3600).as_deref(),
            Some("Monday")
        );
    }

    #[test]
    fn test_weekday_across_spring_forward() {
        // Chicago midnights Fri 2024-03-08 (CST) through Tue 03-12 (CDT), with
        // the CST offset the service reported on the first day.
        let midnights = [
            1_709_877_600,
            1_709_964_000,
            1_710_050_400,
            1_710_133_200,
            1_710_219_600,
        ];
        let labels: Vec<_> = midnights
            .iter()
            .map(|&ts| weekday_label(ts, -6 * 3600).unwrap())
            .collect();
        assert_eq!(labels, ["Friday", "Saturday", "Sunday", "Monday", "Tuesday"]);
    }

    #[test]
    fn test_weekday_across_fall_back() {
        // Sun 2024-11-03 00:00 CDT and Mon 11-04 00:00 CST, CDT offset reported.
        assert_eq!(weekday_label(1_730_610_000, -5 * 3600).as_deref(), Some("Sunday"));
        assert_eq!(weekday_label(1_730_700_000, -5 * 3600).as_deref(), Some("Monday"));
    }

    #[test]
    fn test_weekday_out_of_range() {
        assert_eq!(weekday_label(i64::MAX, 1), None);
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(0.0, TemperatureUnit::Fahrenheit), "32.0\u{00b0}");
        assert_eq!(format_temperature(100.0, TemperatureUnit::Fahrenheit), "212.0\u{00b0}");
        assert_eq!(format_temperature(21.26, TemperatureUnit::Celsius), "21.3\u{00b0}");
        assert_eq!(format_temperature(-8.5, TemperatureUnit::Celsius), "-8.5\u{00b0}");
    }

    #[test]
    fn test_render_celsius_rows() {
        let mut view = TableView::new(&[RenderSlot::First]);
        let binding = SlotBinding::bind(RenderSlot::First, &view);
        render(
            &mut view,
            &binding,
            &forecast(-6 * 3600, CHICAGO_MONDAY),
            TemperatureUnit::Celsius,
        );

        let weekdays: Vec<_> = (0..5)
            .map(|d| view.text(&format!("city1.day{d}.weekday")).unwrap().to_string())
            .collect();
        assert_eq!(
            weekdays,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        );
        assert_eq!(view.text("city1.day1.high"), Some("100.0\u{00b0}"));
        assert_eq!(view.text("city1.day3.low"), Some("-8.5\u{00b0}"));
        assert_eq!(view.text("city1.day4.precip"), Some("100%"));
        assert_eq!(view.text("city1.day0.outlook"), Some("Clear"));
        assert_eq!(view.text("city1.day2.outlook"), Some("Fog"));
        assert_eq!(view.text("city1.day4.outlook"), Some("Thunderstorm"));
    }

    #[test]
    fn test_render_fahrenheit_converts_both_bounds() {
        let mut view = TableView::new(&[RenderSlot::Second]);
        let binding = SlotBinding::bind(RenderSlot::Second, &view);
        render(
            &mut view,
            &binding,
            &forecast(-6 * 3600, CHICAGO_MONDAY),
            TemperatureUnit::Fahrenheit,
        );

        assert_eq!(view.text("city2.day0.high"), Some("32.0\u{00b0}"));
        assert_eq!(view.text("city2.day0.low"), Some("14.0\u{00b0}"));
        assert_eq!(view.text("city2.day1.high"), Some("212.0\u{00b0}"));
        assert_eq!(view.text("city2.day1.precip"), Some("5%"));
    }

    #[test]
    fn test_render_skips_missing_cells() {
        let mut view = TableView::new(&[RenderSlot::First]).without_cell("city1.day0.high");
        let binding = SlotBinding::bind(RenderSlot::First, &view);
        render(
            &mut view,
            &binding,
            &forecast(0, CHICAGO_MONDAY),
            TemperatureUnit::Celsius,
        );

        assert_eq!(view.text("city1.day0.high"), None);
        assert_eq!(view.text("city1.day0.low"), Some("-10.0\u{00b0}"));
    }

    #[test]
    fn test_render_blanks_missing_values() {
        let mut forecast = forecast(-6 * 3600, CHICAGO_MONDAY);
        forecast.daily.temperature_2m_max[1] = None;
        forecast.daily.precipitation_probability_max[2] = None;
        forecast.daily.weather_code[3] = None;

        let mut view = TableView::new(&[RenderSlot::First]);
        let binding = SlotBinding::bind(RenderSlot::First, &view);
        let cell = view.cell("city1.day1.high").unwrap();
        view.set_text(&cell, "stale");
        render(&mut view, &binding, &forecast, TemperatureUnit::Celsius);

        assert_eq!(view.text("city1.day1.high"), Some(""));
        assert_eq!(view.text("city1.day1.low"), Some("50.0\u{00b0}"));
        assert_eq!(view.text("city1.day2.precip"), Some(""));
        assert_eq!(view.text("city1.day3.outlook"), Some(""));
        assert_eq!(view.text("city1.day3.weekday"), Some("Thursday"));
    }

    #[test]
    fn test_render_twice_is_identical() {
        let forecast = forecast(-6 * 3600, CHICAGO_MONDAY);
        let mut view = TableView::new(&[RenderSlot::First]);
        let binding = SlotBinding::bind(RenderSlot::First, &view);
        view.reveal_results();

        render(&mut view, &binding, &forecast, TemperatureUnit::Fahrenheit);
        let first = view.to_markdown();
        render(&mut view, &binding, &forecast, TemperatureUnit::Fahrenheit);
        assert_eq!(view.to_markdown(), first);
    }

    #[test]
    fn test_render_label() {
        let mut view = TableView::new(&[RenderSlot::First]);
        let binding = SlotBinding::bind(RenderSlot::First, &view);
        render_label(&mut view, &binding, &LocationQuery::new("Austin", "Texas"));
        assert_eq!(view.text("city1.name"), Some("Austin, Texas"));
    }
}
