/// Canonicalize Arabic text for comparison.
///
/// Recognition output carries no diacritics and mushaf text carries many, so
/// both sides must pass through this exact transformation before any
/// comparison. Applied per character, in this order:
/// 1. drop everything outside the Arabic block (U+0600-U+06FF) and whitespace,
/// 2. drop tashkeel (U+064B-U+065F),
/// 3. drop tatweel (U+0640),
/// 4. drop Qur'anic annotation signs (U+06D6-U+06ED),
/// 5. fold Alif variants to bare Alif,
/// 6. fold final Ya to plain Ya,
/// 7. fold Ta-marbuta to Ha,
/// then trim surrounding whitespace. Total: empty or all-stripped input
/// normalizes to an empty string.
pub fn normalize_arabic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let folded = match c {
            c if c.is_whitespace() => c,
            c if !('\u{0600}'..='\u{06FF}').contains(&c) => continue,
            '\u{064B}'..='\u{065F}' => continue,
            '\u{0640}' => continue,
            '\u{06D6}'..='\u{06ED}' => continue,
            'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
            'ى' => 'ي',
            'ة' => 'ه',
            c => c,
        };
        out.push(folded);
    }
    out.trim().to_string()
}
