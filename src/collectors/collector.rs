use chrono::{DateTime, Local, Utc};
use log::debug;

use crate::advice::classify;
use crate::advice::fallback::{round_percent, round_temperature};
use crate::advice::translations::{text, Text};
use crate::models::{DashboardView, GaugeInfo, Language, Metric, SensorSnapshot};

/// Builds what the dashboard shows for `snapshot`, or placeholders when offline.
pub fn build_view(snapshot: Option<&SensorSnapshot>, language: Language, now: DateTime<Utc>) -> DashboardView {
    let view = match snapshot {
        Some(snapshot) => online_view(snapshot, language, now),
        None => offline_view(language),
    };
    debug!("{:?}", view);
    view
}

fn online_view(snapshot: &SensorSnapshot, language: Language, now: DateTime<Utc>) -> DashboardView {
    let moisture = round_percent(snapshot.soil_moisture);
    let humidity = round_percent(snapshot.humidity);
    let temperature = round_temperature(snapshot.temperature);

    DashboardView {
        title: text(Text::Title, language).to_string(),
        language,
        online: true,
        moisture: GaugeInfo {
            label: text(Text::SoilMoisture, language).to_string(),
            value: Some(moisture),
            value_display: format!("{}%", moisture),
            percent: fill(moisture / 100.0),
            status: classify(Metric::Moisture, moisture, language).to_string(),
        },
        humidity: GaugeInfo {
            label: text(Text::Humidity, language).to_string(),
            value: Some(humidity),
            value_display: format!("{}%", humidity),
            percent: fill(humidity / 100.0),
            status: classify(Metric::Humidity, humidity, language).to_string(),
        },
        temperature: GaugeInfo {
            label: text(Text::Temperature, language).to_string(),
            value: Some(temperature),
            value_display: format!("{}°C", temperature),
            // The temperature gauge spans 10-40 °C
            percent: fill((temperature - 10.0) / 30.0),
            status: classify(Metric::Temperature, temperature, language).to_string(),
        },
        device_display: snapshot.device_id.clone(),
        last_updated_display: format_age(snapshot.last_updated, now, language),
    }
}

fn offline_view(language: Language) -> DashboardView {
    let placeholder = |key: Text, unit: &str| GaugeInfo {
        label: text(key, language).to_string(),
        value: None,
        value_display: format!("--{}", unit),
        percent: 0.0,
        status: text(Text::NoData, language).to_string(),
    };

    DashboardView {
        title: text(Text::Title, language).to_string(),
        language,
        online: false,
        moisture: placeholder(Text::SoilMoisture, "%"),
        humidity: placeholder(Text::Humidity, "%"),
        temperature: placeholder(Text::Temperature, "°C"),
        device_display: "--".to_string(),
        last_updated_display: text(Text::NoConnection, language).to_string(),
    }
}

fn fill(fraction: f64) -> f32 {
    fraction.clamp(0.0, 1.0) as f32
}

/// Human-friendly age of a reading.
pub fn format_age(then: DateTime<Utc>, now: DateTime<Utc>, language: Language) -> String {
    let seconds = (now - then).num_seconds().max(0);

    if seconds < 60 {
        return text(Text::JustNow, language).to_string();
    }
    if seconds < 3600 {
        let minutes = seconds / 60;
        return match language {
            Language::En => format!("{} min ago", minutes),
            Language::Ar => format!("منذ {} دقيقة", minutes),
        };
    }
    if seconds < 86400 {
        let hours = seconds / 3600;
        return match language {
            Language::En => format!("{} hours ago", hours),
            Language::Ar => format!("منذ {} ساعة", hours),
        };
    }
    then.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn snapshot(soil_moisture: f64, humidity: f64, temperature: f64) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture,
            humidity,
            temperature,
            ..SensorSnapshot::default()
        }
    }

    #[test]
    fn test_online_view() {
        let data = snapshot(64.6, 71.2, 23.96);
        let view = build_view(Some(&data), Language::En, data.last_updated);

        assert!(view.online);
        assert_eq!(view.moisture.value_display, "65%");
        assert_eq!(view.moisture.status, "Optimal");
        assert_eq!(view.humidity.value_display, "71%");
        assert_eq!(view.humidity.status, "Optimal");
        assert_eq!(view.temperature.value_display, "24°C");
        assert_eq!(view.temperature.status, "Perfect");
        assert!((view.temperature.percent - 14.0 / 30.0).abs() < 1e-6);
        assert_eq!(view.last_updated_display, "Just now");
        assert_eq!(view.device_display, "simulation");
    }

    #[test]
    fn test_gauges_are_clamped() {
        let data = snapshot(130.0, -4.0, 55.0);
        let view = build_view(Some(&data), Language::En, data.last_updated);
        assert_eq!(view.moisture.percent, 1.0);
        assert_eq!(view.humidity.percent, 0.0);
        assert_eq!(view.temperature.percent, 1.0);
        assert_eq!(view.moisture.status, "Wet");
    }

    #[test]
    fn test_offline_view() {
        let view = build_view(None, Language::En, Utc::now());
        assert!(!view.online);
        assert_eq!(view.moisture.value_display, "--%");
        assert_eq!(view.temperature.value_display, "--°C");
        assert_eq!(view.humidity.status, "No Data");
        assert_eq!(view.last_updated_display, "No Connection");
    }

    #[test]
    fn test_arabic_view() {
        let data = snapshot(20.0, 90.0, 40.0);
        let view = build_view(Some(&data), Language::Ar, data.last_updated);
        assert_eq!(view.moisture.status, "جاف");
        assert_eq!(view.humidity.status, "رطب");
        assert_eq!(view.temperature.status, "حار");
        assert_eq!(view.moisture.label, "رطوبة التربة");
    }

    #[test]
    fn test_format_age() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::seconds(59), now, Language::En), "Just now");
        assert_eq!(format_age(now - Duration::seconds(150), now, Language::En), "2 min ago");
        assert_eq!(format_age(now - Duration::hours(5), now, Language::En), "5 hours ago");
        assert_eq!(format_age(now - Duration::hours(5), now, Language::Ar), "منذ 5 ساعة");
        // Readings stamped in the future are treated as fresh
        assert_eq!(format_age(now + Duration::seconds(30), now, Language::En), "Just now");

        let old = now - Duration::days(3);
        assert_eq!(
            format_age(old, now, Language::En),
            old.with_timezone(&Local).format("%Y-%m-%d").to_string()
        );
    }
}
