//! Closed word lists used to filter keyword suggestions.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Articles, prepositions, auxiliaries, pronouns and contraction fragments.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did", "will", "would", "could",
        "should", "may", "might", "must", "shall", "can", "need", "dare",
        "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
        "from", "as", "into", "through", "during", "before", "after", "above",
        "below", "between", "under", "again", "further", "then", "once", "here",
        "there", "when", "where", "why", "how", "all", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own",
        "same", "so", "than", "too", "very", "just", "and", "but", "if", "or",
        "because", "until", "while", "although", "though", "that", "which",
        "who", "whom", "this", "these", "those", "it", "its", "i", "you", "he",
        "she", "we", "they", "me", "him", "her", "us", "them", "my", "your",
        "his", "our", "their", "what", "am", "also", "about", "up", "out",
        "over", "down", "off", "any", "both", "either", "neither", "many",
        "much", "s", "t", "d", "ll", "ve", "re", "m",
    ]
    .into_iter()
    .collect()
});

/// Company, brand, product and place names that make poor vocabulary hints.
pub static PROPER_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "google", "apple", "amazon", "microsoft", "meta", "facebook", "twitter",
        "instagram", "youtube", "netflix", "spotify", "uber", "airbnb", "tesla",
        "sony", "nintendo", "toyota", "honda", "nissan", "mazda", "subaru",
        "panasonic", "sharp", "toshiba", "hitachi", "fujitsu", "nec", "canon",
        "nikon", "olympus", "yamaha", "kawasaki", "suzuki", "mitsubishi",
        "softbank", "docomo", "kddi", "rakuten", "line", "mercari", "zozo",
        "uniqlo", "muji", "daiso", "lawson", "familymart", "seven", "eleven",
        "starbucks", "mcdonalds", "disney", "pixar", "marvel", "dc", "warner",
        "universal", "paramount", "fox", "hbo", "bbc", "cnn", "nhk",
        "samsung", "lg", "huawei", "xiaomi", "oppo", "vivo", "oneplus",
        "intel", "amd", "nvidia", "qualcomm", "arm", "ibm", "oracle", "sap",
        "salesforce", "adobe", "zoom", "slack", "dropbox", "github", "gitlab",
        "openai", "anthropic", "deepmind", "chatgpt", "gpt", "claude",
        "iphone", "ipad", "mac", "macbook", "imac", "airpods", "apple watch",
        "android", "windows", "linux", "ios", "macos", "chrome", "safari", "firefox",
        "japan", "tokyo", "osaka", "kyoto", "america", "usa", "china", "korea",
        "europe", "asia", "africa",
    ]
    .into_iter()
    .collect()
});

#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[must_use]
pub fn is_proper_noun(word: &str) -> bool {
    PROPER_NOUNS.contains(word)
}
