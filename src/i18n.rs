use serde::{Deserialize, Serialize};

/// UI languages offered by the language switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Mr,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Mr];

    /// BCP-47 style code, also used by the speech synthesizer.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    /// Name shown in the switcher, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Mr => &MR,
        }
    }
}

/// Every user-visible string, one table per language.
pub struct Strings {
    // Hero
    pub title: &'static str,
    pub subtitle: &'static str,
    pub live_voice_input: &'static str,
    pub upload_video: &'static str,
    pub youtube_url: &'static str,

    // Input panes
    pub live_voice_title: &'static str,
    pub live_voice_description: &'static str,
    pub click_to_record: &'static str,
    pub recording: &'static str,
    pub upload_video_title: &'static str,
    pub upload_video_description: &'static str,
    pub supported_formats: &'static str,
    pub choose_file: &'static str,
    pub youtube_url_title: &'static str,
    pub youtube_url_description: &'static str,
    pub youtube_url_placeholder: &'static str,
    pub extract_and_translate: &'static str,
    pub processing: &'static str,
    pub processing_description: &'static str,

    // Output display
    pub translation_complete: &'static str,
    pub translation_complete_description: &'static str,
    pub text_transcription: &'static str,
    pub read_aloud: &'static str,
    pub braille_translation: &'static str,
    pub copy: &'static str,
    pub download: &'static str,

    // Accessibility controls
    pub toggle_theme: &'static str,
    pub read_page_content: &'static str,
    pub help_accessibility: &'static str,
    pub high_contrast_mode: &'static str,
    pub switch_language: &'static str,
    pub backend_url: &'static str,

    // Footer
    pub tagline: &'static str,
    pub made_by: &'static str,

    // Toasts
    pub recording_started: &'static str,
    pub file_uploaded: &'static str,
    pub translation_complete_toast: &'static str,
    pub braille_copied: &'static str,
    pub download_success: &'static str,
    pub reading_aloud: &'static str,
    pub dark_mode_enabled: &'static str,
    pub light_mode_enabled: &'static str,
    pub high_contrast_enabled: &'static str,
    pub high_contrast_disabled: &'static str,
    pub reading_page: &'static str,
    pub help_message: &'static str,
    pub enter_youtube_url: &'static str,
    pub invalid_youtube_url: &'static str,
    pub youtube_not_available: &'static str,
    pub no_audio_captured: &'static str,
    pub processing_failed: &'static str,
    pub copy_failed: &'static str,
    pub download_failed: &'static str,
    pub speech_failed: &'static str,
}

pub static EN: Strings = Strings {
    title: "Sparsh Vaani",
    subtitle: "Bridging sound and touch — Convert speech to Braille effortlessly",
    live_voice_input: "Live Voice Input",
    upload_video: "Upload Video",
    youtube_url: "YouTube URL",

    live_voice_title: "Live Voice Input",
    live_voice_description: "Click the button below to start recording your voice",
    click_to_record: "Click to record",
    recording: "Recording...",
    upload_video_title: "Upload Video File",
    upload_video_description: "Upload a video file (MP4, MOV, AVI) to extract and translate audio",
    supported_formats: "Supported formats: MP4, MOV, AVI, MKV",
    choose_file: "Choose a file",
    youtube_url_title: "YouTube URL",
    youtube_url_description: "Paste a YouTube video URL to automatically extract and translate its audio",
    youtube_url_placeholder: "https://www.youtube.com/watch?v=...",
    extract_and_translate: "Extract & Translate",
    processing: "Processing...",
    processing_description: "Extracting audio and translating to Braille",

    translation_complete: "Translation Complete",
    translation_complete_description: "Your audio has been successfully transcribed and converted to Braille",
    text_transcription: "Text Transcription",
    read_aloud: "Read Aloud",
    braille_translation: "Braille Translation",
    copy: "Copy",
    download: "Download",

    toggle_theme: "Toggle theme",
    read_page_content: "Read page content",
    help_accessibility: "Help & accessibility",
    high_contrast_mode: "High contrast mode",
    switch_language: "Language",
    backend_url: "Backend URL",

    tagline: "Empowering communication through touch and technology",
    made_by: "Made by Team Sparsh Vaani",

    recording_started: "Recording started",
    file_uploaded: "File uploaded",
    translation_complete_toast: "Translation complete!",
    braille_copied: "Braille text copied to clipboard",
    download_success: "Downloaded successfully",
    reading_aloud: "Reading text aloud",
    dark_mode_enabled: "Dark mode enabled",
    light_mode_enabled: "Light mode enabled",
    high_contrast_enabled: "High contrast enabled",
    high_contrast_disabled: "High contrast disabled",
    reading_page: "Reading page content",
    help_message: "Help: Use the buttons above to select your input method. The app will transcribe and convert to Braille automatically.",
    enter_youtube_url: "Please enter a YouTube URL",
    invalid_youtube_url: "This does not look like a YouTube URL",
    youtube_not_available: "YouTube extraction requires backend support not yet available",
    no_audio_captured: "No audio captured",
    processing_failed: "Failed to process audio",
    copy_failed: "Could not copy to clipboard",
    download_failed: "Could not save the file",
    speech_failed: "Speech synthesizer unavailable",
};

pub static HI: Strings = Strings {
    title: "स्पर्श वाणी",
    subtitle: "ध्वनि और स्पर्श को जोड़ना — भाषण को ब्रेल में आसानी से बदलें",
    live_voice_input: "लाइव आवाज इनपुट",
    upload_video: "वीडियो अपलोड करें",
    youtube_url: "YouTube URL",

    live_voice_title: "लाइव आवाज इनपुट",
    live_voice_description: "अपनी आवाज रिकॉर्ड करना शुरू करने के लिए नीचे दिए गए बटन पर क्लिक करें",
    click_to_record: "रिकॉर्ड करने के लिए क्लिक करें",
    recording: "रिकॉर्डिंग...",
    upload_video_title: "वीडियो फ़ाइल अपलोड करें",
    upload_video_description: "ऑडियो निकालने और अनुवाद करने के लिए एक वीडियो फ़ाइल अपलोड करें (MP4, MOV, AVI)",
    supported_formats: "समर्थित प्रारूप: MP4, MOV, AVI, MKV",
    choose_file: "फ़ाइल चुनें",
    youtube_url_title: "YouTube URL",
    youtube_url_description: "स्वचालित रूप से इसके ऑडियो को निकालने और अनुवाद करने के लिए एक YouTube वीडियो URL पेस्ट करें",
    youtube_url_placeholder: "https://www.youtube.com/watch?v=...",
    extract_and_translate: "निकालें और अनुवाद करें",
    processing: "प्रसंस्करण...",
    processing_description: "ऑडियो निकालना और ब्रेल में अनुवाद करना",

    translation_complete: "अनुवाद पूर्ण",
    translation_complete_description: "आपके ऑडियो को सफलतापूर्वक ट्रांसक्राइब और ब्रेल में परिवर्तित किया गया है",
    text_transcription: "पाठ प्रतिलेखन",
    read_aloud: "जोर से पढ़ें",
    braille_translation: "ब्रेल अनुवाद",
    copy: "कॉपी करें",
    download: "डाउनलोड करें",

    toggle_theme: "थीम टॉगल करें",
    read_page_content: "पेज सामग्री पढ़ें",
    help_accessibility: "सहायता और पहुँच",
    high_contrast_mode: "उच्च कंट्रास्ट मोड",
    switch_language: "भाषा",
    backend_url: "बैकएंड URL",

    tagline: "स्पर्श और प्रौद्योगिकी के माध्यम से संचार को सशक्त बनाना",
    made_by: "टीम स्पर्श वाणी द्वारा निर्मित",

    recording_started: "रिकॉर्डिंग शुरू हुई",
    file_uploaded: "फ़ाइल अपलोड की गई",
    translation_complete_toast: "अनुवाद पूर्ण!",
    braille_copied: "ब्रेल पाठ क्लिपबोर्ड पर कॉपी किया गया",
    download_success: "सफलतापूर्वक डाउनलोड किया गया",
    reading_aloud: "जोर से पाठ पढ़ना",
    dark_mode_enabled: "डार्क मोड सक्षम",
    light_mode_enabled: "लाइट मोड सक्षम",
    high_contrast_enabled: "उच्च कंट्रास्ट सक्षम",
    high_contrast_disabled: "उच्च कंट्रास्ट अक्षम",
    reading_page: "पेज सामग्री पढ़ना",
    help_message: "सहायता: अपनी इनपुट विधि चुनने के लिए ऊपर दिए गए बटनों का उपयोग करें। ऐप स्वचालित रूप से ट्रांसक्राइब और ब्रेल में परिवर्तित करेगा।",
    enter_youtube_url: "कृपया एक YouTube URL दर्ज करें",
    invalid_youtube_url: "यह YouTube URL नहीं लगता",
    youtube_not_available: "YouTube निष्कर्षण के लिए बैकएंड समर्थन अभी उपलब्ध नहीं है",
    no_audio_captured: "कोई ऑडियो कैप्चर नहीं हुआ",
    processing_failed: "ऑडियो प्रोसेस करने में विफल",
    copy_failed: "क्लिपबोर्ड पर कॉपी नहीं हो सका",
    download_failed: "फ़ाइल सहेजी नहीं जा सकी",
    speech_failed: "स्पीच सिंथेसाइज़र उपलब्ध नहीं है",
};

pub static MR: Strings = Strings {
    title: "स्पर्श वाणी",
    subtitle: "ध्वनी आणि स्पर्श यांना जोडणे — भाषण सहजपणे ब्रेलमध्ये रूपांतरित करा",
    live_voice_input: "थेट आवाज इनपुट",
    upload_video: "व्हिडिओ अपलोड करा",
    youtube_url: "YouTube URL",

    live_voice_title: "थेट आवाज इनपुट",
    live_voice_description: "तुमचा आवाज रेकॉर्ड करण्यास प्रारंभ करण्यासाठी खालील बटणावर क्लिक करा",
    click_to_record: "रेकॉर्ड करण्यासाठी क्लिक करा",
    recording: "रेकॉर्डिंग...",
    upload_video_title: "व्हिडिओ फाइल अपलोड करा",
    upload_video_description: "ऑडिओ काढण्यासाठी आणि अनुवाद करण्यासाठी व्हिडिओ फाइल अपलोड करा (MP4, MOV, AVI)",
    supported_formats: "समर्थित स्वरूपे: MP4, MOV, AVI, MKV",
    choose_file: "फाइल निवडा",
    youtube_url_title: "YouTube URL",
    youtube_url_description: "स्वयंचलितपणे त्याचा ऑडिओ काढण्यासाठी आणि अनुवाद करण्यासाठी YouTube व्हिडिओ URL पेस्ट करा",
    youtube_url_placeholder: "https://www.youtube.com/watch?v=...",
    extract_and_translate: "काढा आणि अनुवाद करा",
    processing: "प्रक्रिया करत आहे...",
    processing_description: "ऑडिओ काढणे आणि ब्रेलमध्ये अनुवाद करणे",

    translation_complete: "अनुवाद पूर्ण",
    translation_complete_description: "तुमचा ऑडिओ यशस्वीरित्या ट्रान्सक्रिप्ट केला गेला आहे आणि ब्रेलमध्ये रूपांतरित केला गेला आहे",
    text_transcription: "मजकूर प्रतिलेखन",
    read_aloud: "मोठ्याने वाचा",
    braille_translation: "ब्रेल भाषांतर",
    copy: "कॉपी करा",
    download: "डाउनलोड करा",

    toggle_theme: "थीम टॉगल करा",
    read_page_content: "पृष्ठ सामग्री वाचा",
    help_accessibility: "मदत आणि प्रवेशयोग्यता",
    high_contrast_mode: "उच्च कॉन्ट्रास्ट मोड",
    switch_language: "भाषा",
    backend_url: "बॅकएंड URL",

    tagline: "स्पर्श आणि तंत्रज्ञानाद्वारे संप्रेषण सक्षम करणे",
    made_by: "टीम स्पर्श वाणी द्वारे तयार केले",

    recording_started: "रेकॉर्डिंग सुरू झाले",
    file_uploaded: "फाइल अपलोड केली",
    translation_complete_toast: "भाषांतर पूर्ण!",
    braille_copied: "ब्रेल मजकूर क्लिपबोर्डवर कॉपी केले",
    download_success: "यशस्वीरित्या डाउनलोड केले",
    reading_aloud: "मोठ्याने मजकूर वाचत आहे",
    dark_mode_enabled: "गडद मोड सक्षम",
    light_mode_enabled: "प्रकाश मोड सक्षम",
    high_contrast_enabled: "उच्च कॉन्ट्रास्ट सक्षम",
    high_contrast_disabled: "उच्च कॉन्ट्रास्ट अक्षम",
    reading_page: "पृष्ठ सामग्री वाचत आहे",
    help_message: "मदत: तुमची इनपुट पद्धत निवडण्यासाठी वरील बटणे वापरा. अॅप स्वयंचलितपणे ट्रान्सक्रिप्ट करेल आणि ब्रेलमध्ये रूपांतरित करेल।",
    enter_youtube_url: "कृपया YouTube URL प्रविष्ट करा",
    invalid_youtube_url: "हे YouTube URL वाटत नाही",
    youtube_not_available: "YouTube काढण्यासाठी बॅकएंड समर्थन अद्याप उपलब्ध नाही",
    no_audio_captured: "कोणताही ऑडिओ कॅप्चर झाला नाही",
    processing_failed: "ऑडिओ प्रक्रिया अयशस्वी",
    copy_failed: "क्लिपबोर्डवर कॉपी करता आले नाही",
    download_failed: "फाइल जतन करता आली नाही",
    speech_failed: "स्पीच सिंथेसायझर उपलब्ध नाही",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn hindi_and_marathi_share_the_native_title() {
        assert_eq!(HI.title, MR.title);
        assert_ne!(EN.title, HI.title);
    }

    #[test]
    fn no_table_has_empty_toasts() {
        for lang in Language::ALL {
            let s = lang.strings();
            for text in [
                s.recording_started,
                s.translation_complete_toast,
                s.braille_copied,
                s.download_success,
                s.processing_failed,
                s.copy_failed,
                s.download_failed,
                s.speech_failed,
                s.help_message,
            ] {
                assert!(!text.is_empty(), "empty string in {:?}", lang);
            }
        }
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::Mr).unwrap();
        assert_eq!(json, "\"mr\"");
        let back: Language = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(back, Language::Hi);
    }
}
