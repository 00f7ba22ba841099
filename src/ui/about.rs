//! About screen: help categories and their scrollable text

use serde::{Deserialize, Serialize};

/// Pixels per wheel notch, and per rendered line
pub const SCROLL_STEP: i32 = 30;
/// Vertical space taken by the title and the buttons around the text
pub const RESERVED_HEIGHT: i32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AboutCategory {
    Controls,
    Gameplay,
    Classes,
    Upgrades,
}

impl AboutCategory {
    pub const ALL: [AboutCategory; 4] = [
        AboutCategory::Controls,
        AboutCategory::Gameplay,
        AboutCategory::Classes,
        AboutCategory::Upgrades,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AboutCategory::Controls => "Controls",
            AboutCategory::Gameplay => "Gameplay",
            AboutCategory::Classes => "Classes",
            AboutCategory::Upgrades => "Upgrades",
        }
    }

    /// Accent color for the button border and section title
    pub fn color(self) -> [f32; 4] {
        match self {
            AboutCategory::Controls => [0.0, 0.4, 1.0, 1.0],
            AboutCategory::Gameplay => [0.0, 1.0, 0.0, 1.0],
            AboutCategory::Classes => [0.8, 0.0, 0.8, 1.0],
            AboutCategory::Upgrades => [1.0, 0.65, 0.0, 1.0],
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            AboutCategory::Controls => &[
                "Movement:",
                "- WASD or Arrow Keys to move your character",
                "",
                "Combat:",
                "- Left Mouse Button to shoot arrows at enemies",
                "",
                "Special Abilities:",
                "- Right Mouse Button to sprint (uses stamina)",
                "- Sprint has a cooldown period",
                "",
                "Menu Navigation:",
                "- Click buttons to navigate menus",
                "- ESC to exit game",
            ],
            AboutCategory::Gameplay => &[
                "Core Mechanics:",
                "- Collect orbs to gain experience",
                "- Defeat enemies to gain XP and survive longer",
                "- Level up to become stronger",
                "",
                "Survival:",
                "- Avoid enemies or defeat them with arrows",
                "- Use sprint strategically to escape",
                "- Health increases every 5 levels",
                "",
                "Difficulty:",
                "- Enemies get faster as you level up",
                "- Enemy spawn rate increases with level",
                "- Choose upgrades wisely to survive longer",
            ],
            AboutCategory::Classes => &[
                "Arcane Mage:",
                "- Primary class available",
                "- Shoots magical arrows at enemies",
                "- Can upgrade arrow properties",
                "",
                "Class Features:",
                "- Multiple arrow upgrades",
                "- Sprint ability",
                "- Health and stamina management",
                "",
                "Future Classes:",
                "- More classes coming soon!",
                "- Each with unique abilities",
            ],
            AboutCategory::Upgrades => &[
                "Arrow Upgrades:",
                "- Arrow Count: Shoot multiple arrows",
                "- Arrow Speed: Faster projectile speed",
                "- Arrow Damage: Increased damage",
                "",
                "Survival Upgrades:",
                "- Max Health: Increase health pool",
                "- Sprint Duration: Longer sprint time",
                "- Sprint Cooldown: Faster cooldown",
                "- Sprint Speed: Faster sprint speed",
                "",
                "Upgrade Strategy:",
                "- Choose based on playstyle",
                "- Balance offense and defense",
                "- Prioritize survival upgrades early",
            ],
        }
    }

    /// Furthest the text can scroll on a screen of `screen_height`
    pub fn max_scroll(self, screen_height: i32) -> i32 {
        let content = self.lines().len() as i32 * SCROLL_STEP;
        (content - (screen_height - RESERVED_HEIGHT)).max(0)
    }
}

/// About screen sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutView {
    Categories,
    Section { category: AboutCategory, scroll: i32 },
}

impl AboutView {
    pub fn open(category: AboutCategory) -> Self {
        AboutView::Section { category, scroll: 0 }
    }

    /// Scroll by wheel notches (positive is down). Ignored on the category list.
    pub fn scroll_by(&mut self, notches: i32, screen_height: i32) {
        if let AboutView::Section { category, scroll } = self {
            let max = category.max_scroll(screen_height);
            *scroll = (*scroll + notches * SCROLL_STEP).clamp(0, max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scroll() {
        // 15 lines * 30 = 450 against 720 - 400 = 320
        assert_eq!(AboutCategory::Upgrades.max_scroll(720), 130);
        // Tall screen fits everything
        assert_eq!(AboutCategory::Controls.max_scroll(1080), 0);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut view = AboutView::open(AboutCategory::Upgrades);
        view.scroll_by(-1, 720);
        assert_eq!(view, AboutView::Section { category: AboutCategory::Upgrades, scroll: 0 });
        view.scroll_by(2, 720);
        assert_eq!(view, AboutView::Section { category: AboutCategory::Upgrades, scroll: 60 });
        view.scroll_by(10, 720);
        assert_eq!(view, AboutView::Section { category: AboutCategory::Upgrades, scroll: 130 });
    }

    #[test]
    fn test_category_list_ignores_scroll() {
        let mut view = AboutView::Categories;
        view.scroll_by(3, 720);
        assert_eq!(view, AboutView::Categories);
    }
}
