use crate::models::Language;

/// One reading as the dashboard shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeInfo {
    pub label: String,
    pub value: Option<f64>,
    pub value_display: String,
    /// Gauge fill between 0.0 and 1.0.
    pub percent: f32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub language: Language,
    pub online: bool,
    pub moisture: GaugeInfo,
    pub humidity: GaugeInfo,
    pub temperature: GaugeInfo,
    pub device_display: String,
    pub last_updated_display: String,
}

impl DashboardView {
    pub fn gauges(&self) -> [&GaugeInfo; 3] {
        [&self.moisture, &self.humidity, &self.temperature]
    }
}
