const BANNED_WORDS: &[&str] = &[
    "shit", "fuck", "dick", "cock", "cunt", "wank", "wanker", "bullshit", "asshole", "tits",
    "fanny", "twat", "gangbang", "rape", "nigger", "motherfucker",
];

const TRAILING_PUNCTUATION: &[char] = &['!', '.', ',', '?', ';', ':', '\'', '"'];

/// Case-insensitive substring check against a fixed word list.
///
/// Matching is deliberately naive: a banned word inside a longer word
/// ("Stopcock") is a hit.
pub fn contains_swear_word(text: &str) -> bool {
    let lower = text.to_lowercase();
    BANNED_WORDS.iter().any(|word| {
        lower.contains(word)
            || TRAILING_PUNCTUATION
                .iter()
                .any(|punc| lower.contains(&format!("{word}{punc}")))
    })
}
