//! Layered envelope drawing.
//!
//! Four layers — back panel, letter, flap, front pocket — are rendered
//! into overlapping rects; later widgets overwrite earlier ones, so
//! z-order is simply draw order, chosen per phase:
//!
//! - letter inside / sliding out: back, letter, flap, front
//! - returning: back, flap, letter, front (above the flap, below the front)
//! - promoted / zoomed: back, flap, front, letter
//!
//! Continuous motion is derived here at draw time: elapsed time in the
//! current transition, mapped through an easing curve, becomes a row
//! offset or a rect interpolation. The renderer also reports what it drew
//! (letter rect, slide fraction) back to the animator, which uses the
//! rect for the pull-down geometry and mouse hit-testing.

use crate::state::{EnvelopeAnimator, Phase};
use crate::view::easing::Ease;
use crate::view::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Envelope width in columns.
pub const ENVELOPE_WIDTH: u16 = 38;
/// Envelope height in rows.
pub const ENVELOPE_HEIGHT: u16 = 12;
/// Letter width in columns (resting size).
pub const LETTER_WIDTH: u16 = 30;
/// Letter height in rows (resting size).
pub const LETTER_HEIGHT: u16 = 8;
/// Letter width when fully zoomed.
pub const ZOOM_WIDTH: u16 = 50;
/// Letter height when fully zoomed.
pub const ZOOM_HEIGHT: u16 = 16;

/// Rows of flap art when fully closed.
const FLAP_ROWS: u16 = 4;
/// Rows the letter floats above the envelope top when fully out.
const LETTER_CLEARANCE: u16 = 1;

/// What a frame actually drew, fed back into the animator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameSnapshot {
    /// Full frame area.
    pub viewport: Rect,
    /// Envelope rect after the pull translation.
    pub envelope: Rect,
    /// Letter rect, when the letter was drawn.
    pub letter: Option<Rect>,
    /// Eased fraction of the outward slide, while the letter is sliding.
    pub slide_fraction: Option<f64>,
}

/// One frame's renderer over the animator's current state.
pub struct EnvelopeView<'a> {
    animator: &'a EnvelopeAnimator,
    theme: &'a Theme,
    now: Instant,
}

impl<'a> EnvelopeView<'a> {
    /// Bind a renderer to the animator for one frame.
    pub fn new(animator: &'a EnvelopeAnimator, theme: &'a Theme, now: Instant) -> Self {
        Self {
            animator,
            theme,
            now,
        }
    }

    /// Draw the whole scene and report the geometry that was used.
    pub fn render(&self, frame: &mut Frame) -> FrameSnapshot {
        let area = frame.area();
        let view = self.animator.view();

        self.render_status_line(frame, area);

        // Keep the scene clear of the status line.
        let stage = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        let envelope = self.envelope_rect(stage);
        let slide = self.display_slide_fraction();
        let letter = self.letter_rect(stage, envelope, slide);

        match view.phase() {
            Phase::Closed | Phase::Opening | Phase::Revealing => {
                self.render_back(frame, envelope);
                self.render_letter(frame, letter);
                self.render_flap(frame, envelope);
                self.render_front(frame, envelope);
            }
            Phase::Returning => {
                self.render_back(frame, envelope);
                self.render_flap(frame, envelope);
                self.render_letter(frame, letter);
                self.render_front(frame, envelope);
            }
            Phase::Out | Phase::Zoomed => {
                self.render_back(frame, envelope);
                self.render_flap(frame, envelope);
                self.render_front(frame, envelope);
                self.render_letter(frame, letter);
            }
        }

        let sliding = view.letter_out && !view.letter_above && !view.returning;
        FrameSnapshot {
            viewport: area,
            envelope,
            letter,
            slide_fraction: sliding.then_some(slide),
        }
    }

    /// Envelope rect: horizontally centred, anchored near the stage
    /// bottom so the letter has headroom to slide out, translated by the
    /// eased pull offset.
    fn envelope_rect(&self, stage: Rect) -> Rect {
        let base = anchored_bottom(stage, ENVELOPE_WIDTH, ENVELOPE_HEIGHT);
        let view = self.animator.view();
        let eased = Ease::InOutQuad.apply(self.animator.pull_progress(self.now));
        let offset = if view.pulled_down {
            f64::from(view.envelope_offset) * eased
        } else {
            // Easing back after a recenter; zero once settled.
            f64::from(self.animator.released_offset()) * (1.0 - eased)
        };
        shift_y(base, offset.round() as i32, stage)
    }

    /// Eased fraction of the letter's travel out of the envelope:
    /// 0 = fully inside, 1 = fully out.
    fn display_slide_fraction(&self) -> f64 {
        let view = self.animator.view();
        let eased = Ease::OutCubic.apply(self.animator.slide_progress(self.now));
        if view.returning {
            1.0 - eased
        } else if view.letter_out {
            eased
        } else {
            0.0
        }
    }

    /// Letter rect for this frame: slide interpolation, then zoom
    /// interpolation on top.
    fn letter_rect(&self, stage: Rect, envelope: Rect, slide: f64) -> Option<Rect> {
        if stage.width < LETTER_WIDTH || stage.height < LETTER_HEIGHT {
            return None;
        }
        let inside_y = i32::from(envelope.y) + i32::from(ENVELOPE_HEIGHT)
            - i32::from(LETTER_HEIGHT)
            - 1;
        let out_y =
            i32::from(envelope.y) - i32::from(LETTER_HEIGHT) - i32::from(LETTER_CLEARANCE);
        let y = lerp(inside_y as f64, out_y as f64, slide).round() as i32;
        let x = i32::from(envelope.x) + (i32::from(ENVELOPE_WIDTH) - i32::from(LETTER_WIDTH)) / 2;
        let base = clamp_rect(x, y, LETTER_WIDTH, LETTER_HEIGHT, stage);

        let view = self.animator.view();
        let zoom_eased = Ease::OutCubic.apply(self.animator.zoom_progress(self.now));
        let zoom = if view.zoomed { zoom_eased } else { 1.0 - zoom_eased };
        if zoom <= 0.0 {
            return Some(base);
        }
        let target = centered(
            stage,
            ZOOM_WIDTH.min(stage.width),
            ZOOM_HEIGHT.min(stage.height),
        );
        Some(lerp_rect(base, target, zoom, stage))
    }

    fn render_back(&self, frame: &mut Frame, envelope: Rect) {
        if envelope.is_empty() {
            return;
        }
        frame.render_widget(Clear, envelope);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.envelope),
            envelope,
        );
    }

    /// Flap: converging diagonals from the top corners, shrinking as the
    /// flap swings open, plus a fold line above the envelope once open.
    fn render_flap(&self, frame: &mut Frame, envelope: Rect) {
        if envelope.width < 4 || envelope.height < 4 {
            return;
        }
        let view = self.animator.view();
        let eased = Ease::OutCubic.apply(self.animator.flap_progress(self.now));
        let openness = if view.opening { eased } else { 1.0 - eased };

        let inner_width = usize::from(envelope.width.saturating_sub(2));
        let full = f64::from(FLAP_ROWS);
        let visible = (full * (1.0 - openness)).round() as u16;
        if visible == 0 {
            // Folded back: a thin ridge above the envelope top.
            if envelope.y > 0 {
                let ridge = Rect::new(envelope.x + 1, envelope.y - 1, envelope.width - 2, 1);
                let line = Line::styled("▔".repeat(inner_width), self.theme.flap);
                frame.render_widget(Paragraph::new(line), ridge);
            }
            return;
        }
        let rows = visible.min(FLAP_ROWS);
        let flap_area = Rect::new(
            envelope.x + 1,
            envelope.y + 1,
            envelope.width - 2,
            rows.min(envelope.height.saturating_sub(2)),
        );
        let lines: Vec<Line> = (0..usize::from(rows))
            .map(|row| Line::styled(diagonal_row(inner_width, row), self.theme.flap))
            .collect();
        frame.render_widget(Paragraph::new(lines), flap_area);
    }

    /// Front pocket: the opaque lower face of the envelope. Fills
    /// everything below the flap so the letter only shows once it has
    /// cleared the top, with diagonal creases as texture.
    fn render_front(&self, frame: &mut Frame, envelope: Rect) {
        if envelope.height < FLAP_ROWS + 3 || envelope.width < 4 {
            return;
        }
        let inner_width = usize::from(envelope.width - 2);
        let pocket = Rect::new(
            envelope.x + 1,
            envelope.y + 1 + FLAP_ROWS,
            envelope.width - 2,
            envelope.height - 2 - FLAP_ROWS,
        );
        let lines: Vec<Line> = (0..usize::from(pocket.height))
            .map(|row| Line::styled(pocket_row(inner_width, row), self.theme.front))
            .collect();
        frame.render_widget(Paragraph::new(lines), pocket);
    }

    fn render_letter(&self, frame: &mut Frame, letter: Option<Rect>) {
        let Some(rect) = letter else { return };
        if rect.width < 4 || rect.height < 3 {
            return;
        }
        let view = self.animator.view();
        let border = if view.zoomed {
            self.theme.accent
        } else {
            self.theme.paper
        };
        frame.render_widget(Clear, rect);
        let body = vec![
            Line::styled("Dear friend,", self.theme.ink),
            Line::raw(""),
            Line::styled("The terminal missed you.", self.theme.ink),
            Line::raw(""),
            Line::styled("— letterbox", self.theme.ink),
        ];
        let card = Paragraph::new(body).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(" ✉ ", self.theme.accent))
                .title_alignment(Alignment::Center),
        );
        frame.render_widget(card, rect);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let status = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let hints = Line::styled(
            " Enter/Space/o open · r reset · z zoom · ? help · q quit",
            self.theme.hint,
        );
        frame.render_widget(Paragraph::new(hints), status);
    }
}

/// One row of the flap's converging diagonals.
fn diagonal_row(width: usize, row: usize) -> String {
    let mut chars = vec![' '; width];
    if 2 * row + 1 < width {
        chars[row] = '╲';
        chars[width - 1 - row] = '╱';
    }
    chars.into_iter().collect()
}

/// One row of the front pocket: opaque spaces with crease diagonals
/// descending from the top corners toward the centre.
fn pocket_row(width: usize, row: usize) -> String {
    let mut chars = vec![' '; width];
    let left = 2 * row;
    let right = width.saturating_sub(1 + 2 * row);
    if left < right {
        chars[left] = '╲';
        chars[right] = '╱';
    }
    chars.into_iter().collect()
}

/// Centre a `w × h` rect inside `area`, clamping to fit.
pub fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Centre a `w × h` rect horizontally, anchored one row above the bottom
/// of `area`, clamping to fit.
pub fn anchored_bottom(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    let y_offset = area.height.saturating_sub(h.saturating_add(1));
    Rect::new(area.x + (area.width - w) / 2, area.y + y_offset, w, h)
}

/// True when `(x, y)` falls inside `rect`.
pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Translate a rect vertically, keeping it inside `bounds`.
fn shift_y(rect: Rect, dy: i32, bounds: Rect) -> Rect {
    clamp_rect(i32::from(rect.x), i32::from(rect.y) + dy, rect.width, rect.height, bounds)
}

/// Build a rect from possibly out-of-bounds coordinates, clamped into
/// `bounds` without changing its size (unless the bounds are smaller).
fn clamp_rect(x: i32, y: i32, w: u16, h: u16, bounds: Rect) -> Rect {
    let w = w.min(bounds.width);
    let h = h.min(bounds.height);
    let max_x = i32::from(bounds.x) + i32::from(bounds.width) - i32::from(w);
    let max_y = i32::from(bounds.y) + i32::from(bounds.height) - i32::from(h);
    let x = x.clamp(i32::from(bounds.x), max_x);
    let y = y.clamp(i32::from(bounds.y), max_y);
    Rect::new(x as u16, y as u16, w, h)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate between two rects, clamped into `bounds`.
fn lerp_rect(a: Rect, b: Rect, t: f64, bounds: Rect) -> Rect {
    let x = lerp(f64::from(a.x), f64::from(b.x), t).round() as i32;
    let y = lerp(f64::from(a.y), f64::from(b.y), t).round() as i32;
    let w = lerp(f64::from(a.width), f64::from(b.width), t).round() as u16;
    let h = lerp(f64::from(a.height), f64::from(b.height), t).round() as u16;
    clamp_rect(x, y, w.max(1), h.max(1), bounds)
}

// ===== Tests =====

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
