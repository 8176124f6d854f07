//! Screen layout of the HUD drawn around the 3D surface.
//!
//! The layout is derived from the [`Viewport`] alone and recomputed whenever
//! the viewport changes. Besides drawing, it is used to hit-test mouse
//! clicks against the letter board and the restart button, so it has no
//! raylib handle dependency and can be exercised headless.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Hangman";
pub const RESTART_LABEL: &str = "Restart";
pub const LETTERS_PER_ROW: usize = 13;
pub const TITLE_SIZE: i32 = 28;
pub const WORD_SIZE: i32 = 32;
pub const STATUS_SIZE: i32 = 20;
pub const LETTER_SIZE: i32 = 20;

const MARGIN: f32 = 12.0;
const BUTTON_GAP: f32 = 6.0;
const MAX_BUTTON: f32 = 40.0;
const MIN_BUTTON: f32 = 8.0;
const RESTART_W: f32 = 160.0;
const RESTART_H: f32 = 44.0;

/// Letters on the board, in order.
pub fn alphabet() -> impl Iterator<Item = char> {
    'A'..='Z'
}

/// Rough pixel width of `text` in raylib's default font.
pub fn approx_text_width(text: &str, font_size: i32) -> i32 {
    let spacing = (font_size / 10).max(1);
    let glyph = (font_size as f32 * 0.5).round() as i32;
    let n = text.chars().count() as i32;
    (n * (glyph + spacing) - spacing).max(0)
}

fn contains(rect: &Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

#[derive(Resource, Debug, Clone)]
pub struct HudLayout {
    pub window_w: i32,
    /// Where the 3D surface is drawn.
    pub surface: Rectangle,
    pub title_y: i32,
    pub word_y: i32,
    pub status_y: i32,
    /// One button per letter, `A` first.
    pub letters: [Rectangle; 26],
    /// Centred over the surface; only active when the round is over.
    pub restart: Rectangle,
}

impl HudLayout {
    pub fn compute(viewport: &Viewport) -> Self {
        let win_w = viewport.window.w as f32;
        let (sw, sh) = viewport.surface_size();
        let (sw, sh) = (sw as f32, sh as f32);

        let title_y = MARGIN as i32;
        let surface = Rectangle::new(
            ((win_w - sw) * 0.5).max(0.0),
            MARGIN * 2.0 + TITLE_SIZE as f32,
            sw,
            sh,
        );
        let word_y = (surface.y + sh + MARGIN) as i32;
        let status_y = word_y + WORD_SIZE + 8;
        let board_top = (status_y + STATUS_SIZE) as f32 + MARGIN;

        let per_row = LETTERS_PER_ROW as f32;
        let button = ((win_w - 2.0 * MARGIN - BUTTON_GAP * (per_row - 1.0)) / per_row)
            .clamp(MIN_BUTTON, MAX_BUTTON);
        let row_w = per_row * button + (per_row - 1.0) * BUTTON_GAP;
        let x0 = ((win_w - row_w) * 0.5).max(0.0);

        let letters = std::array::from_fn(|i| {
            let col = (i % LETTERS_PER_ROW) as f32;
            let row = (i / LETTERS_PER_ROW) as f32;
            Rectangle::new(
                x0 + col * (button + BUTTON_GAP),
                board_top + row * (button + BUTTON_GAP),
                button,
                button,
            )
        });

        let restart = Rectangle::new(
            surface.x + (sw - RESTART_W) * 0.5,
            surface.y + (sh - RESTART_H) * 0.5,
            RESTART_W,
            RESTART_H,
        );

        Self {
            window_w: viewport.window.w,
            surface,
            title_y,
            word_y,
            status_y,
            letters,
            restart,
        }
    }

    /// Letter whose button contains `point`, if any.
    pub fn letter_at(&self, point: Vector2) -> Option<char> {
        self.letters
            .iter()
            .zip(alphabet())
            .find(|(rect, _)| contains(rect, point))
            .map(|(_, letter)| letter)
    }

    pub fn restart_hit(&self, point: Vector2) -> bool {
        contains(&self.restart, point)
    }

    /// X coordinate that centres `text` horizontally in the window.
    pub fn centered_x(&self, text: &str, font_size: i32) -> i32 {
        ((self.window_w - approx_text_width(text, font_size)) / 2).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre(rect: &Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    #[test]
    fn every_button_maps_back_to_its_letter() {
        let layout = HudLayout::compute(&Viewport::for_window(1280, 720));
        for (rect, letter) in layout.letters.iter().zip(alphabet()) {
            assert_eq!(layout.letter_at(centre(rect)), Some(letter));
        }
    }

    #[test]
    fn board_sits_below_the_surface() {
        for (w, h) in [(1280, 720), (500, 900)] {
            let layout = HudLayout::compute(&Viewport::for_window(w, h));
            let surface_bottom = layout.surface.y + layout.surface.height;
            assert!(layout.letters.iter().all(|r| r.y > surface_bottom));
        }
    }

    #[test]
    fn restart_is_over_the_surface_and_not_a_letter() {
        let layout = HudLayout::compute(&Viewport::for_window(1024, 768));
        let p = centre(&layout.restart);
        assert!(layout.restart_hit(p));
        assert_eq!(layout.letter_at(p), None);
    }
}
