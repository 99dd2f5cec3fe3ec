//! Declarative animation parameters.
//!
//! Everything here is plain data plus pure functions; the hooks in
//! `crate::hooks` feed browser measurements in and components turn the
//! results into inline styles.

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

/// Maps a progress value onto an output range, clamping the input to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTransform {
    pub from: f64,
    pub to: f64,
}

impl ScrollTransform {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub fn apply(self, progress: f64) -> f64 {
        // NaN comes from zero-sized layouts; treat it as "not started".
        let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        lerp(self.from, self.to, t)
    }
}

pub const CARD_SCALE: ScrollTransform = ScrollTransform::new(0.8, 1.0);
pub const CARD_OPACITY: ScrollTransform = ScrollTransform::new(0.6, 1.0);

/// Scale and opacity of a project card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardEmphasis {
    pub scale: f64,
    pub opacity: f64,
}

impl Default for CardEmphasis {
    fn default() -> Self {
        Self { scale: 1.0, opacity: 1.0 }
    }
}

impl CardEmphasis {
    /// `None` means no scroll measurement is available; the card is shown as-is.
    pub fn from_progress(progress: Option<f64>) -> Self {
        match progress {
            Some(p) => Self {
                scale: CARD_SCALE.apply(p),
                opacity: CARD_OPACITY.apply(p),
            },
            None => Self::default(),
        }
    }

    pub fn style(&self) -> String {
        format!("transform: scale({:.4}); opacity: {:.4};", self.scale, self.opacity)
    }
}

/// Scroll window of a target, as fractions of its own height that must have
/// passed the bottom edge of the viewport. `start` maps to progress 0 and
/// `end` to progress 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub start: f64,
    pub end: f64,
}

/// Cards start growing when their top edge enters and finish once a third of
/// their height beyond the bottom edge has scrolled in.
pub const PROJECT_SCROLL_OFFSET: ScrollOffset = ScrollOffset { start: 0.0, end: 1.33 };

impl ScrollOffset {
    /// Raw (unclamped) progress for a target whose bounding box starts at
    /// `top` (relative to the viewport) and is `height` tall.
    pub fn progress(self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let travelled = viewport_height - top - self.start * height;
        let span = (self.end - self.start) * height;
        if span <= 0.0 {
            return if travelled >= 0.0 { 1.0 } else { 0.0 };
        }
        travelled / span
    }
}

/// A one-shot entrance transition from an offset, faded state to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from_y: f64,
    pub to_y: f64,
    pub from_opacity: f64,
    pub to_opacity: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

pub const ABOUT_ENTRANCE: Entrance = Entrance {
    from_y: 100.0,
    to_y: 0.0,
    from_opacity: 0.0,
    to_opacity: 1.0,
    duration_s: 0.5,
    delay_s: 0.175,
};

pub const INTRO_ENTRANCE: Entrance = Entrance {
    from_y: 20.0,
    to_y: 0.0,
    from_opacity: 0.0,
    to_opacity: 1.0,
    duration_s: 0.5,
    delay_s: 0.2,
};

impl Entrance {
    pub fn style(&self, entered: bool) -> String {
        let (y, opacity) = if entered {
            (self.to_y, self.to_opacity)
        } else {
            (self.from_y, self.from_opacity)
        };
        format!(
            "transform: translateY({y}px); opacity: {opacity}; transition: transform {d}s ease-out {delay}s, opacity {d}s ease-out {delay}s;",
            d = self.duration_s,
            delay = self.delay_s,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        for p in [-10.0, -0.5, -f64::EPSILON, 0.0] {
            let e = CardEmphasis::from_progress(Some(p));
            assert_eq!(e, CardEmphasis { scale: 0.8, opacity: 0.6 }, "p = {p}");
        }
        for p in [1.0, 1.0001, 1.33, 42.0, f64::INFINITY] {
            let e = CardEmphasis::from_progress(Some(p));
            assert_eq!(e, CardEmphasis { scale: 1.0, opacity: 1.0 }, "p = {p}");
        }
    }

    #[test]
    fn emphasis_is_monotonic_in_progress() {
        let mut prev = CardEmphasis::from_progress(Some(-0.1));
        for step in 0..=120 {
            let p = step as f64 / 100.0;
            let next = CardEmphasis::from_progress(Some(p));
            assert!(prev.scale <= next.scale, "scale dropped at {p}");
            assert!(prev.opacity <= next.opacity, "opacity dropped at {p}");
            prev = next;
        }
    }

    #[test]
    fn midpoint_is_linear() {
        let e = CardEmphasis::from_progress(Some(0.5));
        assert!((e.scale - 0.9).abs() < 1e-12);
        assert!((e.opacity - 0.8).abs() < 1e-12);
    }

    #[test]
    fn missing_progress_renders_at_rest() {
        let e = CardEmphasis::from_progress(None);
        assert_eq!(e.scale, 1.0);
        assert_eq!(e.opacity, 1.0);
        assert_eq!(e.style(), "transform: scale(1.0000); opacity: 1.0000;");
    }

    #[test]
    fn nan_progress_is_treated_as_not_started() {
        assert_eq!(CARD_SCALE.apply(f64::NAN), 0.8);
    }

    #[test]
    fn project_offset_geometry() {
        let vh = 800.0;
        let h = 300.0;
        // Top edge just touching the bottom of the viewport.
        assert_eq!(PROJECT_SCROLL_OFFSET.progress(vh, h, vh), 0.0);
        // Still below the fold.
        assert!(PROJECT_SCROLL_OFFSET.progress(vh + 50.0, h, vh) < 0.0);
        // 1.33 * height past the bottom edge.
        let done_top = vh - 1.33 * h;
        assert!((PROJECT_SCROLL_OFFSET.progress(done_top, h, vh) - 1.0).abs() < 1e-12);
        // Halfway through the window.
        let half_top = vh - 0.665 * h;
        assert!((PROJECT_SCROLL_OFFSET.progress(half_top, h, vh) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_height_target_snaps() {
        assert_eq!(PROJECT_SCROLL_OFFSET.progress(900.0, 0.0, 800.0), 0.0);
        assert_eq!(PROJECT_SCROLL_OFFSET.progress(100.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn entrance_styles() {
        let start = ABOUT_ENTRANCE.style(false);
        assert!(start.contains("translateY(100px)"));
        assert!(start.contains("opacity: 0;"));
        assert!(start.contains("0.175s"));

        let end = ABOUT_ENTRANCE.style(true);
        assert!(end.contains("translateY(0px)"));
        assert!(end.contains("opacity: 1;"));

        assert!(INTRO_ENTRANCE.style(false).contains("translateY(20px)"));
        assert!(INTRO_ENTRANCE.style(true).contains("0.2s"));
    }
}
