//! Soundex phonetic encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits following the leading letter of a code.
pub const SOUNDEX_DIGITS: usize = 3;

/// Code used for words that contain no letter.
const EMPTY_CODE: &str = "0000";

/// A Soundex code: one uppercase letter followed by exactly three digits.
///
/// The leading letter may be any alphabetic character, so `école` keeps its
/// `É`. Only ASCII consonants contribute digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundexCode(String);

impl SoundexCode {
    /// Encode a word.
    ///
    /// The word is uppercased and stripped of anything but letters. The
    /// first letter is kept, following ASCII consonants map to digits (vowels,
    /// H, W, Y and non-ASCII letters are dropped), runs of the same digit
    /// collapse into one, and the digits are truncated or zero-padded to three.
    pub fn encode(word: &str) -> Self {
        let mut letters = word
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase);

        let first = match letters.next() {
            Some(c) => c,
            None => return SoundexCode(EMPTY_CODE.to_string()),
        };

        let mut code = String::with_capacity(first.len_utf8() + SOUNDEX_DIGITS);
        code.push(first);

        let mut digits = 0;
        let mut last_digit = None;
        for digit in letters.filter_map(soundex_digit) {
            if digits == SOUNDEX_DIGITS {
                break;
            }
            if last_digit != Some(digit) {
                code.push(digit);
                digits += 1;
                last_digit = Some(digit);
            }
        }

        for _ in digits..SOUNDEX_DIGITS {
            code.push('0');
        }

        SoundexCode(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SoundexCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Digit for an uppercase ASCII letter, `None` for vowels and H, W, Y.
fn soundex_digit(letter: char) -> Option<char> {
    match letter {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}
