use rand::seq::SliceRandom;
use rand::Rng;

use crate::advice::bands::{Bound, StatusBand};
use crate::models::{Language, SensorSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Soil,
    Watering,
    Temperature,
    Humidity,
    Health,
    Tips,
}

// Checked in order, first hit wins.
const TOPICS: &[(Topic, &[&str])] = &[
    (Topic::Soil, &["soil", "moisture", "تربة"]),
    (Topic::Watering, &["water", "ري", "سقي"]),
    (Topic::Temperature, &["temperature", "temp", "حرارة"]),
    (Topic::Humidity, &["humidity", "رطوبة"]),
    (Topic::Health, &["health", "status", "صحة", "حالة"]),
    (Topic::Tips, &["tip", "care", "help", "نصيحة", "نصائح", "مساعدة"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Low,
    Fine,
    High,
}

const SOIL_ADVICE: StatusBand<Level> = StatusBand {
    steps: &[(Bound::Below(30.0), Level::Low), (Bound::AtMost(80.0), Level::Fine)],
    otherwise: Level::High,
};

const WATERING_ADVICE: StatusBand<Level> = StatusBand {
    steps: &[(Bound::Below(40.0), Level::Low)],
    otherwise: Level::Fine,
};

const TEMPERATURE_ADVICE: StatusBand<Level> = StatusBand {
    steps: &[(Bound::Below(18.0), Level::Low), (Bound::AtMost(30.0), Level::Fine)],
    otherwise: Level::High,
};

const HUMIDITY_ADVICE: StatusBand<Level> = StatusBand {
    steps: &[(Bound::Below(40.0), Level::Low), (Bound::AtMost(80.0), Level::Fine)],
    otherwise: Level::High,
};

// Inclusive healthy ranges: moisture, temperature, humidity.
const HEALTHY_MOISTURE: (f64, f64) = (30.0, 85.0);
const HEALTHY_TEMPERATURE: (f64, f64) = (16.0, 32.0);
const HEALTHY_HUMIDITY: (f64, f64) = (35.0, 85.0);

pub const TIPS_EN: &[&str] = &[
    "💧 Water when soil moisture drops below 40% for most plants.",
    "🌡️ Keep temperature between 18-26°C for optimal growth.",
    "💨 Maintain humidity between 40-70% for healthy plants.",
    "☀️ Ensure adequate light but avoid direct harsh sunlight.",
    "🕒 Check your plants daily and water early morning when possible.",
    "🌱 Rotate plants weekly for even growth and light exposure.",
];

pub const TIPS_AR: &[&str] = &[
    "💧 اسقِ معظم النباتات عندما تنخفض رطوبة التربة عن 40%.",
    "🌡️ حافظ على درجة الحرارة بين 18-26°م لنمو مثالي.",
    "💨 حافظ على الرطوبة بين 40-70% لنباتات صحية.",
    "☀️ وفّر إضاءة كافية مع تجنب أشعة الشمس المباشرة القوية.",
    "🕒 تفقد نباتاتك يومياً واسقها في الصباح الباكر إن أمكن.",
    "🌱 أدر النباتات أسبوعياً لنمو متوازن وتعرض متساوٍ للضوء.",
];

pub const DEFAULTS_EN: &[&str] = &[
    "I'm here to help with your plant care! Ask me about soil moisture, watering, temperature, or humidity.",
    "Your current readings show everything is looking good! Is there something specific you'd like to know?",
    "I can provide plant care advice based on your sensor data. What would you like to know?",
    "Feel free to ask about watering schedules, optimal growing conditions, or plant health!",
];

pub const DEFAULTS_AR: &[&str] = &[
    "أنا هنا لمساعدتك في العناية بالنباتات! اسألني عن رطوبة التربة أو السقي أو درجة الحرارة أو الرطوبة.",
    "قراءاتك الحالية تبدو جيدة! هل هناك شيء محدد تود معرفته؟",
    "يمكنني تقديم نصائح للعناية بالنباتات بناءً على بيانات المستشعرات. ماذا تود أن تعرف؟",
    "لا تتردد في السؤال عن مواعيد السقي أو ظروف النمو المثالية أو صحة النباتات!",
];

/// Rounds half up, the way readings are shown on the dashboard.
pub fn round_percent(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round_temperature(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

pub fn detect_topic(message: &str) -> Option<Topic> {
    let message = message.to_lowercase();
    TOPICS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| message.contains(keyword)))
        .map(|(topic, _)| *topic)
}

/// Canned advice for `message`, used whenever the language model is unreachable.
pub fn generate_fallback(message: &str, snapshot: &SensorSnapshot, language: Language) -> String {
    generate_fallback_with(message, snapshot, language, &mut rand::thread_rng())
}

pub fn generate_fallback_with<R: Rng + ?Sized>(
    message: &str,
    snapshot: &SensorSnapshot,
    language: Language,
    rng: &mut R,
) -> String {
    let moisture = round_percent(snapshot.soil_moisture);
    let humidity = round_percent(snapshot.humidity);
    let temperature = round_temperature(snapshot.temperature);

    match detect_topic(message) {
        Some(Topic::Soil) => soil(moisture, language),
        Some(Topic::Watering) => watering(moisture, language),
        Some(Topic::Temperature) => temperature_advice(temperature, language),
        Some(Topic::Humidity) => humidity_advice(humidity, language),
        Some(Topic::Health) => health(moisture, temperature, humidity, language),
        Some(Topic::Tips) => pick(tips(language), rng),
        None => pick(defaults(language), rng),
    }
}

pub fn tips(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => TIPS_EN,
        Language::Ar => TIPS_AR,
    }
}

pub fn defaults(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => DEFAULTS_EN,
        Language::Ar => DEFAULTS_AR,
    }
}

fn pick<R: Rng + ?Sized>(choices: &[&str], rng: &mut R) -> String {
    choices.choose(rng).copied().unwrap_or(DEFAULTS_EN[0]).to_string()
}

fn soil(moisture: f64, language: Language) -> String {
    match (SOIL_ADVICE.lookup(moisture), language) {
        (Level::Low, Language::En) => format!(
            "Your soil moisture is quite low at {}%. I recommend watering your plants soon. Most plants prefer soil moisture between 50-70%.",
            moisture
        ),
        (Level::High, Language::En) => format!(
            "Your soil moisture is quite high at {}%. Make sure there's good drainage to prevent root rot. Consider reducing watering frequency.",
            moisture
        ),
        (Level::Fine, Language::En) => format!(
            "Your soil moisture is excellent at {}%! This is optimal for most plants. Keep up the good care routine.",
            moisture
        ),
        (Level::Low, Language::Ar) => format!(
            "رطوبة التربة منخفضة عند {}%. أنصح بسقي النباتات قريباً. معظم النباتات تفضل رطوبة التربة بين 50-70%.",
            moisture
        ),
        (Level::High, Language::Ar) => format!(
            "رطوبة التربة عالية عند {}%. تأكد من وجود تصريف جيد لمنع تعفن الجذور.",
            moisture
        ),
        (Level::Fine, Language::Ar) => format!(
            "رطوبة التربة ممتازة عند {}%! هذا مثالي لمعظم النباتات.",
            moisture
        ),
    }
}

fn watering(moisture: f64, language: Language) -> String {
    match (WATERING_ADVICE.lookup(moisture), language) {
        (Level::Low, Language::En) => format!(
            "Yes, your plants could use some water. Current soil moisture is {}%. Water slowly until you see slight runoff, then stop.",
            moisture
        ),
        (_, Language::En) => format!(
            "Your soil moisture looks good at {}%. You don't need to water right now. Check again in a day or two.",
            moisture
        ),
        (Level::Low, Language::Ar) => format!(
            "نعم، نباتاتك تحتاج إلى الماء. رطوبة التربة الحالية {}%. اسقِ ببطء حتى ترى تصريف طفيف.",
            moisture
        ),
        (_, Language::Ar) => format!(
            "رطوبة التربة جيدة عند {}%. لا تحتاج للسقي الآن.",
            moisture
        ),
    }
}

fn temperature_advice(temperature: f64, language: Language) -> String {
    match (TEMPERATURE_ADVICE.lookup(temperature), language) {
        (Level::Low, Language::En) => format!(
            "Temperature is {}°C, which is a bit cool for most plants. Consider moving them to a warmer location or using a heat mat.",
            temperature
        ),
        (Level::High, Language::En) => format!(
            "Temperature is {}°C, which is quite warm. Ensure good air circulation and consider moving plants away from direct heat sources.",
            temperature
        ),
        (Level::Fine, Language::En) => format!(
            "Temperature is perfect at {}°C! This is ideal for most houseplants. Your plants should be happy with this temperature.",
            temperature
        ),
        (Level::Low, Language::Ar) => format!(
            "درجة الحرارة {}°م، وهي منخفضة قليلاً لمعظم النباتات. فكّر في نقلها إلى مكان أدفأ أو استخدام سجادة تدفئة.",
            temperature
        ),
        (Level::High, Language::Ar) => format!(
            "درجة الحرارة {}°م، وهي مرتفعة نوعاً ما. احرص على تهوية جيدة وأبعد النباتات عن مصادر الحرارة المباشرة.",
            temperature
        ),
        (Level::Fine, Language::Ar) => format!(
            "درجة الحرارة مثالية عند {}°م! هذا مناسب لمعظم النباتات المنزلية.",
            temperature
        ),
    }
}

fn humidity_advice(humidity: f64, language: Language) -> String {
    match (HUMIDITY_ADVICE.lookup(humidity), language) {
        (Level::Low, Language::En) => format!(
            "Humidity is {}%, which is low for most plants. Consider using a humidifier or placing a water tray near your plants.",
            humidity
        ),
        (Level::High, Language::En) => format!(
            "Humidity is {}%, which is quite high. Ensure good air circulation to prevent fungal issues.",
            humidity
        ),
        (Level::Fine, Language::En) => format!(
            "Humidity is great at {}%! This level is perfect for most houseplants.",
            humidity
        ),
        (Level::Low, Language::Ar) => format!(
            "الرطوبة {}%، وهي منخفضة لمعظم النباتات. استخدم جهاز ترطيب أو ضع صينية ماء بالقرب من نباتاتك.",
            humidity
        ),
        (Level::High, Language::Ar) => format!(
            "الرطوبة {}%، وهي مرتفعة جداً. احرص على تهوية جيدة لتجنب الأمراض الفطرية.",
            humidity
        ),
        (Level::Fine, Language::Ar) => format!(
            "الرطوبة رائعة عند {}%! هذا المستوى مثالي لمعظم النباتات المنزلية.",
            humidity
        ),
    }
}

fn within((low, high): (f64, f64), value: f64) -> bool {
    value >= low && value <= high
}

fn health(moisture: f64, temperature: f64, humidity: f64, language: Language) -> String {
    let checks = [
        (within(HEALTHY_MOISTURE, moisture), "soil moisture", "رطوبة التربة"),
        (within(HEALTHY_TEMPERATURE, temperature), "temperature", "درجة الحرارة"),
        (within(HEALTHY_HUMIDITY, humidity), "humidity", "الرطوبة"),
    ];

    let issues: Vec<&str> = checks
        .iter()
        .filter(|(healthy, _, _)| !healthy)
        .map(|(_, en, ar)| match language {
            Language::En => *en,
            Language::Ar => *ar,
        })
        .collect();

    match (issues.is_empty(), language) {
        (true, Language::En) => format!(
            "Your plants are in excellent health! All readings are optimal: {}% soil moisture, {}°C temperature, {}% humidity.",
            moisture, temperature, humidity
        ),
        (true, Language::Ar) => format!(
            "نباتاتك بصحة ممتازة! جميع القراءات مثالية: رطوبة التربة {}%، درجة الحرارة {}°م، الرطوبة {}%.",
            moisture, temperature, humidity
        ),
        (false, Language::En) => format!(
            "Your plants need some attention. Current issues: {}. Check the readings above and adjust care accordingly.",
            issues.join(", ")
        ),
        (false, Language::Ar) => format!(
            "نباتاتك تحتاج إلى بعض الاهتمام. المشاكل الحالية: {}. راجع القراءات أعلاه واضبط العناية وفقاً لذلك.",
            issues.join("، ")
        ),
    }
}
