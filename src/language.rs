// The four languages a patron can select, resolved from the BCP-47 style
// codes the frontend sends. Anything unrecognized falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Rajasthani,
}

// Voice selection for the Google TTS call. Wavenet-A voices are female;
// raj-IN has no dedicated voice so it borrows the Hindi one.
pub struct Voice {
    pub language_code: &'static str,
    pub name: &'static str,
    pub ssml_gender: &'static str,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code {
            "hi-IN" => Language::Hindi,
            "ta-IN" => Language::Tamil,
            "raj-IN" => Language::Rajasthani,
            _ => Language::English,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Rajasthani => "Rajasthani",
        }
    }

    // Script requirement spelled out for the model prompt.
    pub fn script_instruction(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi in Devanagari script (हिंदी)",
            Language::Tamil => "Tamil in Tamil script (தமிழ்)",
            Language::Rajasthani => "Rajasthani in Devanagari script (राजस्थानी)",
        }
    }

    // One native-script sentence shown to the model as a script example.
    pub fn example(&self) -> &'static str {
        match self {
            Language::English => "Hello, I am happy to help you",
            Language::Hindi => "नमस्ते, मैं आपकी मदद करने के लिए खुश हूं",
            Language::Tamil => "வணக்கம், நான் உங்களுக்கு உதவ மகிழ்ச்சியாக இருக்கிறேன்",
            Language::Rajasthani => "खम्मा घणी, म्हैं थांनै मदद करण खातर राजी हूं",
        }
    }

    pub fn voice(&self) -> Voice {
        match self {
            Language::English => Voice {
                language_code: "en-IN",
                name: "en-IN-Wavenet-A",
                ssml_gender: "FEMALE",
            },
            Language::Hindi | Language::Rajasthani => Voice {
                language_code: "hi-IN",
                name: "hi-IN-Wavenet-A",
                ssml_gender: "FEMALE",
            },
            Language::Tamil => Voice {
                language_code: "ta-IN",
                name: "ta-IN-Wavenet-A",
                ssml_gender: "FEMALE",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(Language::from_code("en-US"), Language::English);
        assert_eq!(Language::from_code("hi-IN"), Language::Hindi);
        assert_eq!(Language::from_code("ta-IN"), Language::Tamil);
        assert_eq!(Language::from_code("raj-IN"), Language::Rajasthani);
    }

    #[test]
    fn unknown_code_defaults_to_english() {
        let lang = Language::from_code("fr-FR");
        assert_eq!(lang, Language::English);
        assert_eq!(lang.script_instruction(), "English");
        assert_eq!(lang.voice().name, "en-IN-Wavenet-A");
    }

    #[test]
    fn rajasthani_borrows_the_hindi_voice() {
        let voice = Language::Rajasthani.voice();
        assert_eq!(voice.language_code, "hi-IN");
        assert_eq!(voice.name, "hi-IN-Wavenet-A");
    }
}
