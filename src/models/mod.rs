pub mod api;
pub mod language;
pub mod snapshot;
pub mod view;

pub use language::Language;
pub use snapshot::{SensorSnapshot, SensorUpdate};
pub use view::{DashboardView, GaugeInfo};

/// Readings the classifier knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Moisture,
    Humidity,
    Temperature,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Moisture, Metric::Humidity, Metric::Temperature];

    pub fn read(&self, snapshot: &SensorSnapshot) -> f64 {
        match self {
            Metric::Moisture => snapshot.soil_moisture,
            Metric::Humidity => snapshot.humidity,
            Metric::Temperature => snapshot.temperature,
        }
    }
}
