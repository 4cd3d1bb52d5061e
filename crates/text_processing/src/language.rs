//! Reply-language detection for bilingual fallback replies.

use unicode_segmentation::UnicodeSegmentation;

use stylist_core::ReplyLanguage;

/// Picks the language a canned reply should use.
///
/// An explicit Bengali locale hint wins. Otherwise the message counts
/// as Bengali when Bengali-script characters (U+0980-U+09FF) make up a
/// meaningful share of its grapheme clusters. Banglish typed in Latin
/// letters stays on the English/Banglish register.
pub fn detect_reply_language(text: &str, locale_hint: Option<&str>) -> ReplyLanguage {
    if let Some(locale) = locale_hint {
        let lowered = locale.trim().to_lowercase();
        if lowered.starts_with("bn") || lowered == "bengali" || lowered == "bangla" {
            return ReplyLanguage::Bengali;
        }
    }

    // Grapheme clusters, not chars: Bengali combining signs would
    // otherwise inflate the denominator.
    let grapheme_count = text.graphemes(true).count();
    let bengali_count = text
        .chars()
        .filter(|c| ('\u{0980}'..='\u{09FF}').contains(c))
        .count();

    if grapheme_count > 0 && bengali_count > grapheme_count / 3 {
        ReplyLanguage::Bengali
    } else {
        ReplyLanguage::English
    }
}
