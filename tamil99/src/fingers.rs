//! Touch-typing finger guidance.
//!
//! Standard finger assignments for the physical QWERTY keyboard that
//! Tamil99 sits on, used by hint displays ("next key: right index"). The
//! shift rule is the usual one: a key typed by one hand takes the opposite
//! hand's Shift, pressed with the pinky.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn opposite(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Hand::Left => "Left",
            Hand::Right => "Right",
        }
    }

    pub fn tamil(self) -> &'static str {
        match self {
            Hand::Left => "இடது",
            Hand::Right => "வலது",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub fn english(self) -> &'static str {
        match self {
            Finger::Thumb => "Thumb",
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Pinky => "Pinky",
        }
    }

    pub fn tamil(self) -> &'static str {
        match self {
            Finger::Thumb => "கட்டைவிரல்",
            Finger::Index => "சுட்டுவிரல்",
            Finger::Middle => "நடுவிரல்",
            Finger::Ring => "மோதிரவிரல்",
            Finger::Pinky => "சிறுவிரல்",
        }
    }
}

/// Key label (canonical, uppercase) -> assigned hand and finger.
static KEY_FINGERS: phf::Map<&'static str, (Hand, Finger)> = phf::phf_map! {
    "`" => (Hand::Left, Finger::Pinky),
    "1" => (Hand::Left, Finger::Pinky),
    "Q" => (Hand::Left, Finger::Pinky),
    "A" => (Hand::Left, Finger::Pinky),
    "Z" => (Hand::Left, Finger::Pinky),
    "TAB" => (Hand::Left, Finger::Pinky),
    "CAPS" => (Hand::Left, Finger::Pinky),
    "CTRL" => (Hand::Left, Finger::Pinky),
    "2" => (Hand::Left, Finger::Ring),
    "W" => (Hand::Left, Finger::Ring),
    "S" => (Hand::Left, Finger::Ring),
    "X" => (Hand::Left, Finger::Ring),
    "3" => (Hand::Left, Finger::Middle),
    "E" => (Hand::Left, Finger::Middle),
    "D" => (Hand::Left, Finger::Middle),
    "C" => (Hand::Left, Finger::Middle),
    "4" => (Hand::Left, Finger::Index),
    "5" => (Hand::Left, Finger::Index),
    "R" => (Hand::Left, Finger::Index),
    "T" => (Hand::Left, Finger::Index),
    "F" => (Hand::Left, Finger::Index),
    "G" => (Hand::Left, Finger::Index),
    "V" => (Hand::Left, Finger::Index),
    "B" => (Hand::Left, Finger::Index),
    "SPACE" => (Hand::Left, Finger::Thumb),
    "ALT" => (Hand::Left, Finger::Thumb),
    "6" => (Hand::Right, Finger::Index),
    "7" => (Hand::Right, Finger::Index),
    "Y" => (Hand::Right, Finger::Index),
    "U" => (Hand::Right, Finger::Index),
    "H" => (Hand::Right, Finger::Index),
    "J" => (Hand::Right, Finger::Index),
    "N" => (Hand::Right, Finger::Index),
    "M" => (Hand::Right, Finger::Index),
    "^" => (Hand::Right, Finger::Index),
    "8" => (Hand::Right, Finger::Middle),
    "I" => (Hand::Right, Finger::Middle),
    "K" => (Hand::Right, Finger::Middle),
    "," => (Hand::Right, Finger::Middle),
    "9" => (Hand::Right, Finger::Ring),
    "O" => (Hand::Right, Finger::Ring),
    "L" => (Hand::Right, Finger::Ring),
    "." => (Hand::Right, Finger::Ring),
    "0" => (Hand::Right, Finger::Pinky),
    "-" => (Hand::Right, Finger::Pinky),
    "=" => (Hand::Right, Finger::Pinky),
    "P" => (Hand::Right, Finger::Pinky),
    "[" => (Hand::Right, Finger::Pinky),
    "]" => (Hand::Right, Finger::Pinky),
    "\\" => (Hand::Right, Finger::Pinky),
    ";" => (Hand::Right, Finger::Pinky),
    "'" => (Hand::Right, Finger::Pinky),
    "/" => (Hand::Right, Finger::Pinky),
    "#" => (Hand::Right, Finger::Pinky),
    "ENTER" => (Hand::Right, Finger::Pinky),
    "BACKSPACE" => (Hand::Right, Finger::Pinky),
    "SHIFT" => (Hand::Right, Finger::Pinky),
};

/// Assignment for a key label; unknown keys default to the right index.
pub fn finger_for_key(label: &str) -> (Hand, Finger) {
    KEY_FINGERS
        .get(label.to_uppercase().as_str())
        .copied()
        .unwrap_or((Hand::Right, Finger::Index))
}

/// Which Shift to hold for a key: the hand opposite the key's own.
pub fn shift_side_for_key(label: &str) -> Hand {
    finger_for_key(label).0.opposite()
}

/// Finger guidance for a press. With Shift the guidance points at the
/// opposite-hand Shift pinky rather than the key's own finger.
pub fn finger_for(label: &str, needs_shift: bool) -> (Hand, Finger) {
    if needs_shift {
        (shift_side_for_key(label), Finger::Pinky)
    } else {
        finger_for_key(label)
    }
}

/// Human-readable guidance, e.g. `"Right Index"`.
pub fn english_name(hand: Hand, finger: Finger) -> String {
    format!("{} {}", hand.english(), finger.english())
}

/// Tamil guidance, e.g. `"வலது சுட்டுவிரல்"`.
pub fn tamil_name(hand: Hand, finger: Finger) -> String {
    format!("{} {}", hand.tamil(), finger.tamil())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_row_assignments() {
        assert_eq!(finger_for_key("a"), (Hand::Left, Finger::Pinky));
        assert_eq!(finger_for_key("F"), (Hand::Left, Finger::Index));
        assert_eq!(finger_for_key("j"), (Hand::Right, Finger::Index));
        assert_eq!(finger_for_key(";"), (Hand::Right, Finger::Pinky));
    }

    #[test]
    fn space_is_a_thumb_key() {
        assert_eq!(finger_for_key("Space"), (Hand::Left, Finger::Thumb));
    }

    #[test]
    fn unknown_keys_default_to_right_index() {
        assert_eq!(finger_for_key("@"), (Hand::Right, Finger::Index));
    }

    #[test]
    fn shift_comes_from_the_opposite_hand() {
        assert_eq!(shift_side_for_key("Q"), Hand::Right);
        assert_eq!(shift_side_for_key("P"), Hand::Left);
        assert_eq!(finger_for("Q", true), (Hand::Right, Finger::Pinky));
        assert_eq!(finger_for("Q", false), (Hand::Left, Finger::Pinky));
    }

    #[test]
    fn names_render_in_both_languages() {
        assert_eq!(english_name(Hand::Right, Finger::Index), "Right Index");
        assert_eq!(tamil_name(Hand::Right, Finger::Index), "வலது சுட்டுவிரல்");
    }
}
