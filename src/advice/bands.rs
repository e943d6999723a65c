use crate::advice::translations;
use crate::models::{Language, Metric};

/// Upper edge of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Admits values strictly below the edge.
    Below(f64),
    /// Admits values up to and including the edge.
    AtMost(f64),
}

impl Bound {
    fn admits(&self, value: f64) -> bool {
        match *self {
            Bound::Below(edge) => value < edge,
            Bound::AtMost(edge) => value <= edge,
        }
    }
}

/// Ordered bands covering the whole real line.
///
/// `steps` are checked in order; a value none of them admits lands in `otherwise`.
#[derive(Debug, Clone, Copy)]
pub struct StatusBand<T: 'static> {
    pub steps: &'static [(Bound, T)],
    pub otherwise: T,
}

impl<T: Copy> StatusBand<T> {
    pub fn lookup(&self, value: f64) -> T {
        self.steps
            .iter()
            .find(|(bound, _)| bound.admits(value))
            .map(|(_, label)| *label)
            .unwrap_or(self.otherwise)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    Dry,
    Poor,
    Optimal,
    Wet,
    Good,
    Perfect,
    Hot,
    Cold,
}

impl StatusLabel {
    /// English label, also the fallback for incomplete tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Dry => "Dry",
            StatusLabel::Poor => "Poor",
            StatusLabel::Optimal => "Optimal",
            StatusLabel::Wet => "Wet",
            StatusLabel::Good => "Good",
            StatusLabel::Perfect => "Perfect",
            StatusLabel::Hot => "Hot",
            StatusLabel::Cold => "Cold",
        }
    }
}

pub const MOISTURE_BANDS: StatusBand<StatusLabel> = StatusBand {
    steps: &[
        (Bound::Below(30.0), StatusLabel::Dry),
        (Bound::Below(50.0), StatusLabel::Poor),
        (Bound::Below(80.0), StatusLabel::Optimal),
    ],
    otherwise: StatusLabel::Wet,
};

pub const HUMIDITY_BANDS: StatusBand<StatusLabel> = StatusBand {
    steps: &[
        (Bound::Below(40.0), StatusLabel::Poor),
        (Bound::Below(70.0), StatusLabel::Good),
        (Bound::Below(85.0), StatusLabel::Optimal),
    ],
    otherwise: StatusLabel::Wet,
};

pub const TEMPERATURE_BANDS: StatusBand<StatusLabel> = StatusBand {
    steps: &[
        (Bound::Below(15.0), StatusLabel::Cold),
        (Bound::Below(20.0), StatusLabel::Good),
        (Bound::Below(28.0), StatusLabel::Perfect),
        (Bound::Below(35.0), StatusLabel::Good),
    ],
    otherwise: StatusLabel::Hot,
};

pub fn bands_for(metric: Metric) -> &'static StatusBand<StatusLabel> {
    match metric {
        Metric::Moisture => &MOISTURE_BANDS,
        Metric::Humidity => &HUMIDITY_BANDS,
        Metric::Temperature => &TEMPERATURE_BANDS,
    }
}

pub fn status(metric: Metric, value: f64) -> StatusLabel {
    bands_for(metric).lookup(value)
}

/// Qualitative label for a reading in the requested language.
pub fn classify(metric: Metric, value: f64, language: Language) -> &'static str {
    translations::label(status(metric, value), language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wetness(label: StatusLabel) -> u8 {
        match label {
            StatusLabel::Dry => 0,
            StatusLabel::Poor => 1,
            StatusLabel::Optimal => 2,
            StatusLabel::Wet => 3,
            other => panic!("unexpected moisture label {:?}", other),
        }
    }

    #[test]
    fn test_moisture_boundaries() {
        assert_eq!(classify(Metric::Moisture, 29.9, Language::En), "Dry");
        assert_eq!(classify(Metric::Moisture, 30.0, Language::En), "Poor");
        assert_eq!(classify(Metric::Moisture, 50.0, Language::En), "Optimal");
        assert_eq!(classify(Metric::Moisture, 80.0, Language::En), "Wet");
    }

    #[test]
    fn test_moisture_out_of_range() {
        assert_eq!(classify(Metric::Moisture, -12.0, Language::En), "Dry");
        assert_eq!(classify(Metric::Moisture, 250.0, Language::En), "Wet");
    }

    #[test]
    fn test_moisture_is_monotonic() {
        let mut previous = 0;
        let mut value = -20.0;
        while value <= 120.0 {
            let rank = wetness(status(Metric::Moisture, value));
            assert!(rank >= previous, "moisture label went backwards at {}", value);
            previous = rank;
            value += 0.5;
        }
        assert_eq!(previous, 3);
    }

    #[test]
    fn test_humidity_boundaries() {
        assert_eq!(classify(Metric::Humidity, 39.99, Language::En), "Poor");
        assert_eq!(classify(Metric::Humidity, 40.0, Language::En), "Good");
        assert_eq!(classify(Metric::Humidity, 70.0, Language::En), "Optimal");
        assert_eq!(classify(Metric::Humidity, 85.0, Language::En), "Wet");
    }

    #[test]
    fn test_temperature_boundaries() {
        assert_eq!(classify(Metric::Temperature, 14.9, Language::En), "Cold");
        assert_eq!(classify(Metric::Temperature, 15.0, Language::En), "Good");
        assert_eq!(classify(Metric::Temperature, 20.0, Language::En), "Perfect");
        assert_eq!(classify(Metric::Temperature, 27.9, Language::En), "Perfect");
        assert_eq!(classify(Metric::Temperature, 28.0, Language::En), "Good");
        assert_eq!(classify(Metric::Temperature, 35.0, Language::En), "Hot");
    }

    #[test]
    fn test_arabic_labels() {
        assert_eq!(classify(Metric::Humidity, 90.0, Language::Ar), "رطب");
        assert_eq!(classify(Metric::Moisture, 10.0, Language::Ar), "جاف");
        assert_eq!(classify(Metric::Temperature, 40.0, Language::Ar), "حار");
    }

    #[test]
    fn test_classify_is_stable() {
        let first = classify(Metric::Temperature, 22.5, Language::Ar);
        let second = classify(Metric::Temperature, 22.5, Language::Ar);
        assert_eq!(first, second);
    }

    #[test]
    fn test_at_most_bound() {
        const STEPS: &[(Bound, u8)] = &[(Bound::Below(30.0), 0), (Bound::AtMost(80.0), 1)];
        let band = StatusBand {
            steps: STEPS,
            otherwise: 2u8,
        };
        assert_eq!(band.lookup(80.0), 1);
        assert_eq!(band.lookup(80.1), 2);
        assert_eq!(band.lookup(f64::NAN), 2);
    }
}
