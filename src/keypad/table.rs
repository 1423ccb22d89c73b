//! Standard telephone keypad letter layout.
//!
//! Fixed to the 2-9 Latin layout; 0 and 1 carry no letters.

/// Letters printed on a keypad digit, `None` for 0, 1 and non-digits.
pub fn letters_for(digit: char) -> Option<&'static [char]> {
    match digit {
        '2' => Some(&['A', 'B', 'C']),
        '3' => Some(&['D', 'E', 'F']),
        '4' => Some(&['G', 'H', 'I']),
        '5' => Some(&['J', 'K', 'L']),
        '6' => Some(&['M', 'N', 'O']),
        '7' => Some(&['P', 'Q', 'R', 'S']),
        '8' => Some(&['T', 'U', 'V']),
        '9' => Some(&['W', 'X', 'Y', 'Z']),
        _ => None,
    }
}

/// Digit carrying an uppercase letter.
pub fn digit_for(letter: char) -> Option<char> {
    ('2'..='9').find(|&d| letters_for(d).is_some_and(|letters| letters.contains(&letter)))
}

/// Whether `letter` may stand in for `digit`.
pub fn allows(digit: char, letter: char) -> bool {
    letters_for(digit).is_some_and(|letters| letters.contains(&letter))
}
