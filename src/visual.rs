//! Drawing the placement preview: a tinted disc over the boost area and a
//! one-line balance label under it.

use crate::constants::bundle::*;
use crate::constants::*;
use crate::format::format_rate;
use crate::locale::Bundle;
use crate::predict::PlacementPreview;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }
}

pub mod palette {
    use super::Color;

    pub const HEAL: Color = Color::rgb(0.596, 1.0, 0.596);
    pub const SCARLET: Color = Color::rgb(1.0, 0.204, 0.110);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

/// Host draw layers the overlay places itself relative to.
pub mod layer {
    pub const OVERLAY_UI: f32 = 120.0;

    /// Disc and outline, just under the UI overlay.
    pub const PREVIEW: f32 = OVERLAY_UI - 1.0;

    /// Label and backplate, above the disc.
    pub const LABEL: f32 = PREVIEW + 1.0;
}

const FILL_ALPHA: f32 = 0.16;
const STROKE_WIDTH: f32 = 1.6;
const BACKPLATE_ALPHA: f32 = 0.42;
const BACKPLATE_PAD_X: f32 = 12.0;
const BACKPLATE_PAD_Y: f32 = 8.0;
const LABEL_SCALE: f32 = 0.85;

/// Font settings that must be restored after the overlay draws its label.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontState {
    pub integer_positions: bool,
    pub scale: f32,
    pub color: Color,
}

impl Default for FontState {
    fn default() -> Self {
        FontState {
            integer_positions: true,
            scale: 1.0,
            color: palette::WHITE,
        }
    }
}

/// Host renderer. World-space calls use world units; text calls use screen space.
pub trait OverlayCanvas {
    fn set_z(&mut self, z: f32);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, width: f32, color: Color);

    /// Rectangle centered on (`x`, `y`).
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Multiply UI-space lengths by this to get pixels.
    fn ui_scale(&self) -> f32 {
        1.0
    }

    /// World coordinates to screen coordinates.
    fn project(&self, x: f32, y: f32) -> (f32, f32);

    fn font_state(&self) -> FontState;

    fn set_font_state(&mut self, state: FontState);

    /// Width and height of `text` with the current font state.
    fn measure_text(&self, text: &str) -> (f32, f32);

    /// Draw `text` horizontally centered on `x`, baseline at `y`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Reset color and z after a batch of primitives.
    fn reset(&mut self) {}
}

pub fn preview_color(preview: &PlacementPreview) -> Color {
    if preview.positive {
        palette::HEAL
    } else {
        palette::SCARLET
    }
}

pub fn label_text(preview: &PlacementPreview, bundle: &dyn Bundle) -> String {
    if preview.graph_count == 0 {
        return bundle.text(PREVIEW_NONE);
    }

    let state = if preview.positive {
        bundle.text(PREVIEW_POSITIVE)
    } else {
        bundle.text(PREVIEW_NEGATIVE)
    };
    format!("{}  {}", state, format_rate(preview.balance))
}

/// Draw the preview if it is active. Returns whether anything was drawn.
pub fn render_preview(
    canvas: &mut dyn OverlayCanvas,
    preview: &PlacementPreview,
    bundle: &dyn Bundle,
) -> bool {
    if !preview.active {
        return false;
    }

    let color = preview_color(preview);
    let scale = canvas.ui_scale();

    canvas.set_z(layer::PREVIEW);
    canvas.fill_circle(
        preview.world_x,
        preview.world_y,
        preview.range,
        color.with_alpha(FILL_ALPHA),
    );
    canvas.stroke_circle(
        preview.world_x,
        preview.world_y,
        preview.range,
        STROKE_WIDTH * scale,
        color,
    );
    canvas.reset();

    render_label(canvas, preview, bundle, color);
    true
}

fn render_label(
    canvas: &mut dyn OverlayCanvas,
    preview: &PlacementPreview,
    bundle: &dyn Bundle,
    color: Color,
) {
    let text = label_text(preview, bundle);
    let scale = canvas.ui_scale();
    let saved = canvas.font_state();

    canvas.set_font_state(FontState {
        integer_positions: false,
        scale: LABEL_SCALE / scale,
        color: saved.color,
    });

    let (text_width, text_height) = canvas.measure_text(&text);
    let (sx, sy) = canvas.project(
        preview.world_x,
        preview.world_y + preview.range + LABEL_OFFSET,
    );

    canvas.set_z(layer::LABEL);
    canvas.fill_rect(
        sx,
        sy,
        text_width + BACKPLATE_PAD_X * scale,
        text_height + BACKPLATE_PAD_Y * scale,
        palette::BLACK.with_alpha(BACKPLATE_ALPHA),
    );
    canvas.reset();

    canvas.set_font_state(FontState {
        integer_positions: false,
        scale: LABEL_SCALE / scale,
        color,
    });
    canvas.draw_text(&text, sx, sy + text_height / 2.0);

    canvas.set_font_state(saved);
}
