use serde::Serialize;

pub const WHITE: &str = "#fff";
pub const BLACK: &str = "#000";
pub const SHADOW_DARK: &str = "rgba(0,0,0,0.7)";
pub const SHADOW_LIGHT: &str = "rgba(255,255,255,0.5)";

/// The four derived rendering colors. Body text follows the background
/// verdict; hero text, border and shadow follow the hero-image verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contrast {
    pub body_text: &'static str,
    pub hero_text: &'static str,
    pub hero_border: &'static str,
    pub hero_shadow: &'static str,
}

/// Pure function of the two brightness verdicts. The shadow contrasts with
/// the hero text color, not with the background.
pub fn decide(background_dark: bool, hero_dark: bool) -> Contrast {
    let body_text = if background_dark { WHITE } else { BLACK };
    let hero_text = if hero_dark { WHITE } else { BLACK };
    let hero_shadow = if hero_text == WHITE { SHADOW_DARK } else { SHADOW_LIGHT };
    Contrast {
        body_text,
        hero_text,
        hero_border: hero_text,
        hero_shadow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_background_gets_white_body_text() {
        assert_eq!(decide(true, false).body_text, WHITE);
        assert_eq!(decide(false, false).body_text, BLACK);
    }

    #[test]
    fn dark_hero_gets_white_text_and_dark_shadow() {
        let c = decide(false, true);
        assert_eq!(c.hero_text, WHITE);
        assert_eq!(c.hero_border, WHITE);
        assert_eq!(c.hero_shadow, SHADOW_DARK);
    }

    #[test]
    fn light_hero_gets_black_text_and_light_shadow() {
        let c = decide(true, false);
        assert_eq!(c.hero_text, BLACK);
        assert_eq!(c.hero_border, BLACK);
        assert_eq!(c.hero_shadow, SHADOW_LIGHT);
    }

    #[test]
    fn verdicts_are_independent() {
        for &bg in &[true, false] {
            for &hero in &[true, false] {
                let c = decide(bg, hero);
                assert_eq!(c.body_text == WHITE, bg);
                assert_eq!(c.hero_text == WHITE, hero);
                assert_eq!(decide(bg, hero), c);
            }
        }
    }
}
