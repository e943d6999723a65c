use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

pub const DEMO_SOIL_MOISTURE: f64 = 65.0;
pub const DEMO_HUMIDITY: f64 = 72.0;
pub const DEMO_TEMPERATURE: f64 = 24.0;

const DEMO_DEVICE: &str = "simulation";
const DEFAULT_DEVICE: &str = "ESP32";

/// Latest reading reported by the sensor board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSnapshot {
    pub soil_moisture: f64,
    pub humidity: f64,
    pub temperature: f64,
    pub last_updated: DateTime<Utc>,
    pub device_id: String,
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            soil_moisture: DEMO_SOIL_MOISTURE,
            humidity: DEMO_HUMIDITY,
            temperature: DEMO_TEMPERATURE,
            last_updated: Utc::now(),
            device_id: DEMO_DEVICE.to_string(),
        }
    }
}

/// Partial reading as posted by a device or embedded in a chat request.
///
/// Omitted (or `null`) readings keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorUpdate {
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReading {
    Number(f64),
    Text(String),
}

// Firmware sends readings either as JSON numbers or as strings like "41.5".
fn deserialize_reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawReading>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawReading::Number(value)) => value,
        Some(RawReading::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid reading {:?}: {}", text, e)))?,
    };

    if !value.is_finite() {
        return Err(de::Error::custom(format!("reading is not finite: {}", value)));
    }
    Ok(Some(value))
}

impl SensorUpdate {
    /// Produces the snapshot that replaces `previous` once this update is accepted.
    pub fn apply_to(&self, previous: &SensorSnapshot, now: DateTime<Utc>) -> SensorSnapshot {
        let device_id = match self.device_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => DEFAULT_DEVICE.to_string(),
        };

        SensorSnapshot {
            last_updated: now,
            device_id,
            ..self.overlay(previous)
        }
    }

    /// Overlays only the readings, keeping the base's device and timestamp.
    pub fn overlay(&self, base: &SensorSnapshot) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture: self.soil_moisture.unwrap_or(base.soil_moisture),
            humidity: self.humidity.unwrap_or(base.humidity),
            temperature: self.temperature.unwrap_or(base.temperature),
            last_updated: base.last_updated,
            device_id: base.device_id.clone(),
        }
    }
}

impl From<&SensorSnapshot> for SensorUpdate {
    fn from(snapshot: &SensorSnapshot) -> Self {
        Self {
            soil_moisture: Some(snapshot.soil_moisture),
            humidity: Some(snapshot.humidity),
            temperature: Some(snapshot.temperature),
            device_id: Some(snapshot.device_id.clone()),
        }
    }
}
