/// Calculate the Levenshtein distance (edit distance) between two strings
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let m = s1_chars.len();
    let n = s2_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows are enough: the previous one and the one being filled
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] { 0 } else { 1 };
            curr[j] = std::cmp::min(
                std::cmp::min(
                    prev[j] + 1,      // deletion
                    curr[j - 1] + 1   // insertion
                ),
                prev[j - 1] + cost    // substitution
            );
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalize an identifier for fuzzy comparison: lowercase, no spaces,
/// hyphens or underscores. "Times New Roman" and "TimesNewRoman" match.
pub fn normalize_font_id(font: &str) -> String {
    font.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Available fonts closest to `wanted`, best first, at most `limit` of them.
///
/// Used for hints only; the caller never rejects a font that is missing
/// from `available`.
pub fn closest_fonts<'a>(wanted: &str, available: &'a [String], limit: usize) -> Vec<&'a str> {
    let target = normalize_font_id(wanted);
    if target.is_empty() {
        return Vec::new();
    }
    let max_distance = std::cmp::max(2, target.chars().count() / 3);

    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .filter_map(|font| {
            let candidate = normalize_font_id(font);
            if candidate.is_empty() {
                return None;
            }
            let distance = if candidate == target {
                0
            } else if candidate.starts_with(&target) || target.starts_with(&candidate) {
                1
            } else {
                levenshtein_distance(&target, &candidate)
            };
            (distance <= max_distance).then_some((distance, font.as_str()))
        })
        .collect();

    scored.sort();
    scored.into_iter().take(limit).map(|(_, font)| font).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("Arial", "Arial"), 0);
    }

    #[test]
    fn test_normalize_font_id() {
        assert_eq!(normalize_font_id("Times New Roman"), "timesnewroman");
        assert_eq!(normalize_font_id("TimesNewRoman-Bold"), "timesnewromanbold");
    }

    #[test]
    fn test_closest_fonts() {
        let available: Vec<String> = ["Arial-BoldMT", "ArialMT", "Helvetica", "Helvetica-Bold", "Zapfino"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(closest_fonts("Helvetica Bold", &available, 3)[0], "Helvetica-Bold");
        assert_eq!(closest_fonts("Helvetca", &available, 1), vec!["Helvetica"]);
        assert!(closest_fonts("Comic Sans", &available, 3).is_empty());
        assert!(closest_fonts("", &available, 3).is_empty());
    }
}
