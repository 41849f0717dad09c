//! Inline styles for hover/press feedback, staggered appearance and input focus.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Button,
    /// Call-to-action buttons on the landing block.
    HeroButton,
    Card,
    BetItem,
    NavLink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pointer {
    #[default]
    Rest,
    Hover,
    Pressed,
    /// Mouse released while still over the element.
    Released,
}

impl Pointer {
    pub fn on_enter(self) -> Self { Self::Hover }
    pub fn on_leave(self) -> Self { Self::Rest }
    pub fn on_down(self) -> Self { Self::Pressed }

    pub fn on_up(self) -> Self {
        match self {
            Self::Pressed => Self::Released,
            other => other,
        }
    }
}

pub fn pointer_style(surface: Surface, pointer: Pointer) -> String {
    let transition = match pointer {
        Pointer::Pressed => "all 0.1s ease",
        _ => "all 0.3s ease",
    };
    let transform = match (surface, pointer) {
        (Surface::HeroButton, Pointer::Hover) => "translateY(-3px) scale(1.02)",
        (Surface::HeroButton, _) => "translateY(0) scale(1)",
        (_, Pointer::Hover) => "translateY(-2px)",
        _ => "translateY(0)",
    };
    let shadow = match (surface, pointer) {
        (Surface::HeroButton, Pointer::Hover) => "0 10px 25px rgba(0,0,0,0.2)",
        (Surface::Button, Pointer::Hover | Pointer::Released) => "0 8px 20px rgba(0,0,0,0.15)",
        (_, Pointer::Hover | Pointer::Released) => "0 5px 15px rgba(0,0,0,0.1)",
        (Surface::Card, _) => "0 3px 10px rgba(0,0,0,0.1)",
        (Surface::BetItem, _) => "0 2px 8px rgba(0,0,0,0.1)",
        _ => "none",
    };
    let mut style = format!("transition: {}; transform: {}; box-shadow: {};", transition, transform, shadow);
    if surface == Surface::NavLink && matches!(pointer, Pointer::Hover | Pointer::Released) {
        style.push_str(" background-color: rgba(255,255,255,0.15);");
    }
    style
}

/// Delay before the `index`-th element on a page fades in.
pub fn appear_delay_ms(index: usize) -> u32 {
    100 + (index as u32).saturating_mul(100)
}

pub fn appear_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;"
    }
}

/// Style for a form field wrapper. The wrapper lifts while one of its inputs
/// has focus and hands the highlight colours down as CSS variables.
pub fn focus_style(focused: bool) -> &'static str {
    if focused {
        "transform: translateY(-2px); --input-border: #3498db; --input-glow: 0 0 0 3px rgba(52, 152, 219, 0.1);"
    } else {
        "transform: translateY(0); --input-border: #e9ecef; --input-glow: none;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_lifts_and_buttons_cast_deeper_shadow() {
        let card = pointer_style(Surface::Card, Pointer::Hover);
        assert!(card.contains("translateY(-2px)"));
        assert!(card.contains("0 5px 15px"));
        let button = pointer_style(Surface::Button, Pointer::Hover);
        assert!(button.contains("0 8px 20px"));
    }

    #[test]
    fn leaving_restores_resting_shadow_per_surface() {
        assert!(pointer_style(Surface::Card, Pointer::Rest).contains("0 3px 10px"));
        assert!(pointer_style(Surface::BetItem, Pointer::Rest).contains("0 2px 8px"));
        assert!(pointer_style(Surface::Button, Pointer::Rest).contains("box-shadow: none"));
    }

    #[test]
    fn press_flattens_with_fast_transition() {
        let p = Pointer::Rest.on_enter().on_down();
        let s = pointer_style(Surface::Button, p);
        assert!(s.contains("all 0.1s ease"));
        assert!(s.contains("translateY(0)"));
        assert_eq!(p.on_up(), Pointer::Released);
        assert!(pointer_style(Surface::Button, p.on_up()).contains("all 0.3s ease"));
        assert_eq!(Pointer::Hover.on_up(), Pointer::Hover);
    }

    #[test]
    fn hero_buttons_scale() {
        assert!(pointer_style(Surface::HeroButton, Pointer::Hover).contains("scale(1.02)"));
        assert!(pointer_style(Surface::HeroButton, Pointer::Rest).contains("scale(1)"));
    }

    #[test]
    fn nav_links_tint_background_on_hover() {
        assert!(pointer_style(Surface::NavLink, Pointer::Hover).contains("background-color"));
        assert!(!pointer_style(Surface::NavLink, Pointer::Rest).contains("background-color"));
    }

    #[test]
    fn appearance_is_staggered() {
        let delays: Vec<u32> = (0..3).map(appear_delay_ms).collect();
        assert_eq!(delays, vec![100, 200, 300]);
        assert!(appear_style(false).starts_with("opacity: 0"));
    }

    #[test]
    fn focused_fields_lift_and_highlight() {
        assert!(focus_style(true).contains("translateY(-2px)"));
        assert!(focus_style(true).contains("#3498db"));
        assert!(focus_style(false).contains("#e9ecef"));
    }
}
