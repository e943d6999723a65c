use crate::models::{Language, SensorSnapshot};

pub fn system_prompt(snapshot: &SensorSnapshot, language: Language) -> String {
    match language {
        Language::En => format!(
            "You are a helpful plant care assistant with access to real-time sensor data. \n\
             Current readings:\n\
             - Soil Moisture: {}%\n\
             - Humidity: {}%\n\
             - Temperature: {}°C\n\
             \n\
             Provide helpful, concise plant care advice based on these readings. Keep responses under 100 words and be encouraging. If sensor data shows concerning values, prioritize addressing those issues.",
            snapshot.soil_moisture, snapshot.humidity, snapshot.temperature
        ),
        Language::Ar => format!(
            "أنت مساعد ذكي للعناية بالنباتات لديك الوصول إلى بيانات المستشعرات في الوقت الفعلي.\n\
             القراءات الحالية:\n\
             - رطوبة التربة: {}%\n\
             - الرطوبة: {}%\n\
             - درجة الحرارة: {}°م\n\
             \n\
             قدم نصائح مفيدة ومختصرة للعناية بالنباتات بناءً على هذه القراءات. اجعل الردود أقل من 100 كلمة وكن مشجعاً. إذا أظهرت بيانات المستشعرات قيماً مثيرة للقلق، أعط الأولوية لمعالجة هذه المشاكل.",
            snapshot.soil_moisture, snapshot.humidity, snapshot.temperature
        ),
    }
}

/// Full completion prompt sent to the language model.
pub fn build_prompt(message: &str, snapshot: &SensorSnapshot, language: Language) -> String {
    format!(
        "{}\n\nUser Question: {}\n\nPlease respond in {}:\n\nAssistant:",
        system_prompt(snapshot, language),
        message,
        language.english_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_readings() {
        let snapshot = SensorSnapshot {
            soil_moisture: 41.5,
            humidity: 60.0,
            temperature: 22.3,
            ..SensorSnapshot::default()
        };
        let prompt = build_prompt("Is it dry?", &snapshot, Language::En);
        assert!(prompt.contains("- Soil Moisture: 41.5%"));
        assert!(prompt.contains("- Humidity: 60%"));
        assert!(prompt.contains("- Temperature: 22.3°C"));
        assert!(prompt.contains("User Question: Is it dry?"));
        assert!(prompt.ends_with("Please respond in English:\n\nAssistant:"));
    }

    #[test]
    fn test_arabic_prompt() {
        let prompt = build_prompt("هل التربة جافة؟", &SensorSnapshot::default(), Language::Ar);
        assert!(prompt.contains("رطوبة التربة: 65%"));
        assert!(prompt.contains("Please respond in Arabic"));
    }
}
