//! Word splitting shared by the case converters.

use super::to_text::ToText;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];
const CONTRACTIONS: [&str; 7] = ["d", "ll", "m", "re", "s", "t", "ve"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    /// Lowercase letters and letters without case.
    Lower,
    Digit,
    Emoji,
    Break,
}

fn classify(c: char) -> CharClass {
    if c.is_ascii_digit() {
        CharClass::Digit
    } else if is_pictograph(c) {
        CharClass::Emoji
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_alphanumeric() {
        CharClass::Lower
    } else {
        CharClass::Break
    }
}

fn is_letter(class: CharClass) -> bool {
    matches!(class, CharClass::Upper | CharClass::Lower)
}

// Dingbats and the astral pictograph blocks, regional indicators included.
fn is_pictograph(c: char) -> bool {
    matches!(c, '\u{2700}'..='\u{27BF}' | '\u{1F000}'..='\u{1FAFF}')
}

fn is_regional_indicator(c: char) -> bool {
    matches!(c, '\u{1F1E6}'..='\u{1F1FF}')
}

/// Variation selectors, skin tones and the keycap mark attach to the
/// preceding pictograph.
fn is_emoji_modifier(c: char) -> bool {
    matches!(
        c,
        '\u{FE0E}' | '\u{FE0F}' | '\u{20E3}' | '\u{1F3FB}'..='\u{1F3FF}'
    )
}

const ZERO_WIDTH_JOINER: char = '\u{200D}';

struct Scanner {
    chars: Vec<char>,
    classes: Vec<CharClass>,
}

impl Scanner {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let classes = chars.iter().map(|&c| classify(c)).collect();
        Self { chars, classes }
    }

    fn class_at(&self, index: usize) -> CharClass {
        self.classes.get(index).copied().unwrap_or(CharClass::Break)
    }

    fn char_is(&self, index: usize, predicate: impl Fn(char) -> bool) -> bool {
        self.chars.get(index).is_some_and(|&c| predicate(c))
    }

    fn run_end(&self, start: usize, class: CharClass) -> usize {
        let mut end = start;
        while self.class_at(end) == class {
            end += 1;
        }
        end
    }

    /// Whether a word may stop before `index`: at a break, at the end of the
    /// text, or where a capital opens the next word. After an all-caps word
    /// only a capitalized word counts.
    fn closes_word(&self, index: usize, upper: bool) -> bool {
        match self.class_at(index) {
            CharClass::Break => true,
            CharClass::Upper => !upper || self.class_at(index + 1) == CharClass::Lower,
            _ => false,
        }
    }

    /// End of an apostrophe contraction starting at `start`, if there is one.
    /// The suffix takes the case of the word it follows.
    fn contraction_end(&self, start: usize, upper: bool) -> Option<usize> {
        if !self.char_is(start, |c| APOSTROPHES.contains(&c)) {
            return None;
        }
        let suffix_start = start + 1;
        CONTRACTIONS.iter().find_map(|suffix| {
            let end = suffix_start + suffix.len();
            let candidate: String = self.chars.get(suffix_start..end)?.iter().collect();
            let expected = if upper {
                suffix.to_uppercase()
            } else {
                suffix.to_string()
            };
            (candidate == expected && self.closes_word(end, upper)).then_some(end)
        })
    }

    /// `1st`, `22nd`, `3RD`: a suffix chosen by the last digit, in one case,
    /// not followed by a further letter.
    fn ordinal_end(&self, digits_end: usize) -> Option<usize> {
        let suffix = match self.chars[digits_end - 1] {
            '1' => "st",
            '2' => "nd",
            '3' => "rd",
            _ => "th",
        };
        let end = digits_end + suffix.len();
        let candidate: String = self.chars.get(digits_end..end)?.iter().collect();
        let same_case = candidate == suffix || candidate == suffix.to_uppercase();
        (same_case && !is_letter(self.class_at(end))).then_some(end)
    }

    /// One pictograph with its modifiers, a flag made of two regional
    /// indicators, or a zero-width-joiner sequence of those.
    fn emoji_end(&self, start: usize) -> usize {
        let mut end = start + 1;
        if self.char_is(start, is_regional_indicator) && self.char_is(end, is_regional_indicator) {
            end += 1;
        }
        loop {
            while self.char_is(end, is_emoji_modifier) {
                end += 1;
            }
            if self.char_is(end, |c| c == ZERO_WIDTH_JOINER)
                && self.class_at(end + 1) == CharClass::Emoji
            {
                end += 2;
            } else {
                return end;
            }
        }
    }

    /// End of the word starting at a non-break character `start`.
    fn word_end(&self, start: usize) -> usize {
        let (end, upper) = match self.class_at(start) {
            CharClass::Digit => {
                let digits_end = self.run_end(start, CharClass::Digit);
                return self.ordinal_end(digits_end).unwrap_or(digits_end);
            }
            CharClass::Upper => {
                let upper_end = self.run_end(start, CharClass::Upper);
                if self.class_at(upper_end) != CharClass::Lower {
                    (upper_end, true)
                } else if upper_end - start > 1 {
                    // "XMLHttp": the last capital opens the next word.
                    return upper_end - 1;
                } else {
                    (self.run_end(upper_end, CharClass::Lower), false)
                }
            }
            CharClass::Lower => (self.run_end(start, CharClass::Lower), false),
            CharClass::Emoji => return self.emoji_end(start),
            CharClass::Break => return start,
        };
        self.contraction_end(end, upper).unwrap_or(end)
    }

    fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut index = 0;
        while index < self.chars.len() {
            if self.class_at(index) == CharClass::Break {
                index += 1;
                continue;
            }
            let end = self.word_end(index);
            words.push(self.chars[index..end].iter().collect());
            index = end;
        }
        words
    }
}

/// Split text into words: capitalized words, runs of capitals, lowercase
/// runs, digit runs, ordinals and emoji. Contractions such as `don't` stay
/// inside their word.
///
/// # Examples
/// ```
/// use lodash_compat::string::words;
/// assert_eq!(words("fred, barney, & pebbles"), ["fred", "barney", "pebbles"]);
/// assert_eq!(words("XMLHttpRequest2"), ["XML", "Http", "Request", "2"]);
/// ```
pub fn words<T: ToText + ?Sized>(input: &T) -> Vec<String> {
    Scanner::new(&input.to_text()).words()
}

/// Drop the apostrophe of a contraction kept by [`words`].
pub(crate) fn strip_apostrophes(word: &str) -> String {
    word.chars().filter(|c| !APOSTROPHES.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_splits_on_separators() {
        assert_eq!(words("foo bar"), ["foo", "bar"]);
        assert_eq!(words("--foo-bar--"), ["foo", "bar"]);
        assert_eq!(words("__foo_bar__"), ["foo", "bar"]);
        assert_eq!(words("  "), Vec::<String>::new());
    }

    #[test]
    fn test_words_camel_and_capitals() {
        assert_eq!(words("fooBar"), ["foo", "Bar"]);
        assert_eq!(words("FOO BAR"), ["FOO", "BAR"]);
        assert_eq!(words("FooBar"), ["Foo", "Bar"]);
        assert_eq!(words("isHTML5Ready"), ["is", "HTML", "5", "Ready"]);
        assert_eq!(words("ABc"), ["A", "Bc"]);
    }

    #[test]
    fn test_words_digits_and_ordinals() {
        assert_eq!(words("foo2bar"), ["foo", "2", "bar"]);
        assert_eq!(words("1st place"), ["1st", "place"]);
        assert_eq!(words("22ND"), ["22ND"]);
        assert_eq!(words("3rd4th"), ["3rd", "4th"]);
        assert_eq!(words("11th"), ["11", "th"]);
        assert_eq!(words("1stly"), ["1", "stly"]);
    }

    #[test]
    fn test_words_contractions() {
        assert_eq!(words("don't stop"), ["don't", "stop"]);
        assert_eq!(words("b\u{2019}ll"), ["b\u{2019}ll"]);
        assert_eq!(words("rock'n'roll"), ["rock", "n", "roll"]);
        assert_eq!(words("'quoted'"), ["quoted"]);
        assert_eq!(words("don'tStop"), ["don't", "Stop"]);
        assert_eq!(words("it\u{2019}sOK"), ["it\u{2019}s", "OK"]);
        assert_eq!(words("DON'T stop"), ["DON'T", "stop"]);
        assert_eq!(words("DON'TStop"), ["DON'T", "Stop"]);
        assert_eq!(words("don'ts"), ["don", "ts"]);
    }

    #[test]
    fn test_words_keeps_emoji() {
        assert_eq!(words("I \u{2764} Rust"), ["I", "\u{2764}", "Rust"]);
        assert_eq!(words("ok\u{1F44D}\u{1F3FD}go"), ["ok", "\u{1F44D}\u{1F3FD}", "go"]);
        assert_eq!(
            words("\u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}"),
            ["\u{1F1FA}\u{1F1F8}", "\u{1F1EB}\u{1F1F7}"]
        );
        assert_eq!(
            words("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} family"),
            ["\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}", "family"]
        );
        assert_eq!(words("\u{1F600}\u{1F600}"), ["\u{1F600}", "\u{1F600}"]);
    }

    #[test]
    fn test_words_math_operators_are_breaks() {
        assert_eq!(words("×"), Vec::<String>::new());
        assert_eq!(words("2×3÷4"), ["2", "3", "4"]);
    }

    #[test]
    fn test_words_other_scripts() {
        assert_eq!(words("привет мир"), ["привет", "мир"]);
        assert_eq!(words("Привет"), ["Привет"]);
    }

    #[test]
    fn test_strip_apostrophes() {
        assert_eq!(strip_apostrophes("don't"), "dont");
        assert_eq!(strip_apostrophes("we\u{2019}re"), "were");
    }
}
