use crate::advice::bands::StatusLabel;
use crate::models::Language;

const AR_LABELS: &[(StatusLabel, &str)] = &[
    (StatusLabel::Dry, "جاف"),
    (StatusLabel::Poor, "ضعيف"),
    (StatusLabel::Optimal, "مثالي"),
    (StatusLabel::Wet, "رطب"),
    (StatusLabel::Good, "جيد"),
    (StatusLabel::Perfect, "ممتاز"),
    (StatusLabel::Hot, "حار"),
    (StatusLabel::Cold, "بارد"),
];

pub fn label(status: StatusLabel, language: Language) -> &'static str {
    let table = match language {
        Language::En => return status.as_str(),
        Language::Ar => AR_LABELS,
    };

    table
        .iter()
        .find(|(key, _)| *key == status)
        .map(|(_, text)| *text)
        .unwrap_or_else(|| status.as_str())
}

/// Fixed interface strings used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    SoilMoisture,
    Humidity,
    Temperature,
    Assistant,
    Welcome,
    NoData,
    NoConnection,
    LastUpdated,
    JustNow,
    Device,
}

fn english(key: Text) -> &'static str {
    match key {
        Text::Title => "Project Gaia",
        Text::SoilMoisture => "Soil Moisture",
        Text::Humidity => "Humidity",
        Text::Temperature => "Temperature",
        Text::Assistant => "Plant Care Assistant",
        Text::Welcome => "Hello! I'm your AI plant care assistant. Ask me anything about your plants or check your sensor data.",
        Text::NoData => "No Data",
        Text::NoConnection => "No Connection",
        Text::LastUpdated => "Last updated",
        Text::JustNow => "Just now",
        Text::Device => "Device",
    }
}

const AR_TEXT: &[(Text, &str)] = &[
    (Text::Title, "مشروع جايا"),
    (Text::SoilMoisture, "رطوبة التربة"),
    (Text::Humidity, "الرطوبة"),
    (Text::Temperature, "درجة الحرارة"),
    (Text::Assistant, "مساعد العناية بالنباتات"),
    (Text::Welcome, "مرحباً! أنا مساعدك الذكي للعناية بالنباتات. اسألني أي شيء عن نباتاتك أو تحقق من بيانات المستشعرات."),
    (Text::NoData, "لا توجد بيانات"),
    (Text::NoConnection, "لا يوجد اتصال"),
    (Text::LastUpdated, "آخر تحديث"),
    (Text::JustNow, "الآن"),
    (Text::Device, "الجهاز"),
];

pub fn text(key: Text, language: Language) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Ar => AR_TEXT
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
            .unwrap_or_else(|| english(key)),
    }
}
