//! Screen-relative widget placement
//!
//! Every rectangle is derived from the screen size, so a different
//! resolution only moves the buttons.

use glam::Vec2;

use crate::sim::Bounds;

/// A clickable rectangle with a label
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Bounds,
    pub label: &'static str,
}

impl Button {
    fn new(x: i32, y: i32, w: i32, h: i32, label: &'static str) -> Self {
        Self {
            rect: rect(x, y, w, h),
            label,
        }
    }

    #[inline]
    pub fn is_clicked(&self, pos: Vec2) -> bool {
        self.rect.contains_point(pos)
    }
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> Bounds {
    Bounds::new(Vec2::new(x as f32, y as f32), Vec2::new(w as f32, h as f32))
}

pub const UPGRADE_BUTTON_WIDTH: i32 = 300;
pub const UPGRADE_BUTTON_HEIGHT: i32 = 120;
pub const UPGRADE_PADDING: i32 = 20;

pub const ABOUT_BUTTON_WIDTH: i32 = 200;
pub const ABOUT_BUTTON_HEIGHT: i32 = 50;
pub const ABOUT_SPACING: i32 = 20;
pub const ABOUT_START_Y: i32 = 150;

/// Widget rectangles for one screen size (whole pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    fn half_w(&self) -> i32 {
        self.width.div_euclid(2)
    }

    fn half_h(&self) -> i32 {
        self.height.div_euclid(2)
    }

    /// Bottom-right quit button, live on every screen
    pub fn exit_button(&self) -> Button {
        Button::new(self.width - 100, self.height - 50, 80, 40, "Exit")
    }

    // === Menu ===

    pub fn start_button(&self) -> Button {
        Button::new(self.half_w() - 100, self.half_h() + 50, 200, 50, "Start")
    }

    pub fn about_button(&self) -> Button {
        Button::new(self.half_w() - 100, self.half_h() + 120, 200, 50, "About")
    }

    // === Class select ===

    /// Clicking inside selects the Arcane Mage
    pub fn class_box(&self) -> Bounds {
        rect(self.half_w() - 100, self.half_h() - 100, 200, 100)
    }

    pub fn begin_button(&self) -> Button {
        Button::new(self.width - 200, self.height - 100, 180, 50, "Begin venture")
    }

    // === Game over / details ===

    pub fn details_button(&self) -> Button {
        Button::new(self.half_w() - 120, self.half_h() + 40, 110, 50, "Details")
    }

    pub fn game_over_menu_button(&self) -> Button {
        Button::new(self.half_w() + 10, self.half_h() + 40, 110, 50, "Main Menu")
    }

    pub fn details_menu_button(&self) -> Button {
        Button::new(self.half_w() - 100, self.height - 100, 200, 50, "Main Menu")
    }

    // === Level up ===

    /// Two-per-row grid of `count` upgrade buttons, vertically centered
    pub fn upgrade_grid(&self, count: usize) -> Vec<Bounds> {
        let cell_w = UPGRADE_BUTTON_WIDTH + UPGRADE_PADDING;
        let cell_h = UPGRADE_BUTTON_HEIGHT + UPGRADE_PADDING;
        let start_x = (self.width - (UPGRADE_BUTTON_WIDTH * 2 + UPGRADE_PADDING)).div_euclid(2);
        let start_y = self.upgrade_grid_top(count);

        (0..count as i32)
            .map(|i| {
                let (row, col) = (i / 2, i % 2);
                rect(
                    start_x + col * cell_w,
                    start_y + row * cell_h,
                    UPGRADE_BUTTON_WIDTH,
                    UPGRADE_BUTTON_HEIGHT,
                )
            })
            .collect()
    }

    /// Top edge of the upgrade grid; the title sits above it
    pub fn upgrade_grid_top(&self, count: usize) -> i32 {
        let rows = count as i32 / 2 + 1;
        (self.height - rows * (UPGRADE_BUTTON_HEIGHT + UPGRADE_PADDING)).div_euclid(2)
    }

    // === About ===

    /// Category buttons, two columns starting at `ABOUT_START_Y`
    pub fn about_grid(&self, count: usize) -> Vec<Bounds> {
        let start_x = (self.width - (ABOUT_BUTTON_WIDTH * 2 + ABOUT_SPACING)).div_euclid(2);
        (0..count as i32)
            .map(|i| {
                let (row, col) = (i / 2, i % 2);
                rect(
                    start_x + col * (ABOUT_BUTTON_WIDTH + ABOUT_SPACING),
                    ABOUT_START_Y + row * (ABOUT_BUTTON_HEIGHT + ABOUT_SPACING),
                    ABOUT_BUTTON_WIDTH,
                    ABOUT_BUTTON_HEIGHT,
                )
            })
            .collect()
    }

    pub fn about_menu_button(&self) -> Button {
        Button::new(self.half_w() - 100, self.height - 100, 200, 50, "Back to Menu")
    }

    pub fn about_categories_button(&self) -> Button {
        Button::new(10, 15, 260, 40, "Back to Categories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(1280, 720)
    }

    #[test]
    fn test_menu_buttons() {
        let l = layout();
        assert_eq!(l.start_button().rect.min, Vec2::new(540.0, 410.0));
        assert_eq!(l.about_button().rect.min, Vec2::new(540.0, 480.0));
        assert!(l.start_button().is_clicked(Vec2::new(640.0, 435.0)));
        assert!(!l.start_button().is_clicked(Vec2::new(640.0, 460.0)));
        assert_eq!(l.exit_button().rect.min, Vec2::new(1180.0, 670.0));
    }

    #[test]
    fn test_upgrade_grid_two_per_row() {
        let cells = layout().upgrade_grid(7);
        assert_eq!(cells.len(), 7);
        // (720 - 4 * 140) / 2
        assert_eq!(cells[0].min, Vec2::new(330.0, 80.0));
        assert_eq!(cells[1].min, Vec2::new(650.0, 80.0));
        assert_eq!(cells[2].min, Vec2::new(330.0, 220.0));
        assert_eq!(cells[6].min, Vec2::new(330.0, 500.0));
        for pair in cells.windows(2) {
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn test_upgrade_grid_empty() {
        assert!(layout().upgrade_grid(0).is_empty());
    }

    #[test]
    fn test_about_grid() {
        let cells = layout().about_grid(4);
        assert_eq!(cells[0].min, Vec2::new(430.0, 150.0));
        assert_eq!(cells[1].min, Vec2::new(650.0, 150.0));
        assert_eq!(cells[2].min, Vec2::new(430.0, 220.0));
        assert_eq!(cells[3].min, Vec2::new(650.0, 220.0));
    }

    #[test]
    fn test_exit_tracks_screen_size() {
        let l = Layout::new(800, 600);
        assert_eq!(l.exit_button().rect.min, Vec2::new(700.0, 550.0));
        assert_eq!(l.begin_button().rect.min, Vec2::new(600.0, 500.0));
    }
}
