//! ASCII cat sprites, keyed by the avatar pane's class string.

use ratatui::style::Color;

use crate::tui::theme::*;

const GODOT: &[&str] = &[
    r"    /\_/\    ",
    r"   ( o.o )   ",
    r"    > ^ <    ",
    r"   /|   |\   ",
    r"  (_|___|_)  ",
];

const TABBY: &[&str] = &[
    r"    /\_/\    ",
    r"   ( -.- )   ",
    r"  ~( > ^ <)  ",
    r"   /|≡≡≡|\   ",
    r"  (_|___|_)  ",
];

const TUXEDO: &[&str] = &[
    r"    /\_/\    ",
    r"   ( ^.^ )   ",
    r"    >\v/<    ",
    r"   /| # |\   ",
    r"  (_|___|_)  ",
];

const CALICO: &[&str] = &[
    r"    /\_/\    ",
    r"   ( o.O )   ",
    r"    > ^ <    ",
    r"   /|:::|\   ",
    r"  (_|___|_)  ",
];

const SIAMESE: &[&str] = &[
    r"    /\_/\    ",
    r"   ( =.= )   ",
    r"    > ~ <    ",
    r"   /|   |\   ",
    r"  (_|___|_)  ",
];

/// User-added cats have no sprite of their own.
const MYSTERY: &[&str] = &[
    r"    /\_/\    ",
    r"   ( ?.? )   ",
    r"    > ? <    ",
    r"   /|   |\   ",
    r"  (_|___|_)  ",
];

/// Look up the sprite for a class string. Returns `None` for classes
/// without registered art (user-added cats).
pub fn sprite(class: &str) -> Option<&'static [&'static str]> {
    match class {
        "cat-godot" => Some(GODOT),
        "cat-tabby" => Some(TABBY),
        "cat-tuxedo" => Some(TUXEDO),
        "cat-calico" => Some(CALICO),
        "cat-siamese" => Some(SIAMESE),
        _ => None,
    }
}

/// Sprite to render when the class has no registered art.
pub fn fallback_sprite() -> &'static [&'static str] {
    MYSTERY
}

/// Coat color for a class string.
pub fn coat(class: &str) -> Color {
    match class {
        "cat-godot" => COAT_BLUE,
        "cat-tabby" => COAT_ORANGE,
        "cat-tuxedo" => TEXT_WHITE,
        "cat-calico" => COAT_CORAL,
        "cat-siamese" => COAT_CREAM,
        _ => TEXT_DIM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BUILTIN_CATS, CLASS_PREFIX};

    #[test]
    fn test_every_builtin_has_a_sprite() {
        for (id, _) in BUILTIN_CATS {
            let class = format!("{}{}", CLASS_PREFIX, id);
            assert!(sprite(&class).is_some(), "missing sprite for {}", class);
        }
    }

    #[test]
    fn test_unknown_class_has_no_sprite() {
        assert!(sprite("cat-nyan").is_none());
        assert!(!fallback_sprite().is_empty());
    }
}
