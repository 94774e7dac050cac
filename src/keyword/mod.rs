use regex::Regex;

const STOP_WORDS: [&str; 11] = [
    "on", "in", "the", "a", "an", "and", "of", "with", "to", "is", "was",
];

/// Reduce a prompt to at most two topic words, preserving their order.
/// A prompt with nothing left after stop-word removal comes back trimmed
/// but otherwise unchanged.
pub fn extract(prompt: &str) -> String {
    let words = Regex::new(r"\w+").expect("valid literal pattern");
    let lowered = prompt.to_lowercase();
    let keywords: Vec<&str> = words
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .take(2)
        .collect();
    if keywords.is_empty() {
        prompt.trim().to_string()
    } else {
        keywords.join(" ")
    }
}

pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_two_survivors_in_order() {
        assert_eq!(extract("A travel site on the Himalayas"), "travel site");
    }

    #[test]
    fn lowercases_and_splits_on_word_boundaries() {
        assert_eq!(extract("Cooking: Italian-Recipes!"), "cooking italian");
    }

    #[test]
    fn single_survivor_stands_alone() {
        assert_eq!(extract("the Himalayas"), "himalayas");
    }

    #[test]
    fn stop_words_only_falls_back_to_trimmed_prompt() {
        assert_eq!(extract("  on the in a  "), "on the in a");
    }

    #[test]
    fn extraction_is_deterministic() {
        let prompt = "A blog about deep sea creatures";
        assert_eq!(extract(prompt), extract(prompt));
    }

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("travel site"), "Travel Site");
        assert_eq!(title_case("HIMALAYAS"), "Himalayas");
        assert_eq!(title_case(""), "");
    }
}
