//! View adapter.
//!
//! Wraps engine output in a renderable [`Fragment`]: the text container and,
//! if enabled, a cursor glyph right after it. The adapter owns no animation
//! state; blinking is left to whoever styles [`CURSOR_CLASS`].

use std::{fmt, time::Instant};

use typewriter_core::{
    ClockInstant, ConfigError, Engine, EngineError, Hooks, NoopHooks, TypewriterConfig,
};

/// Glyph drawn after the text when the cursor is enabled.
pub const DEFAULT_CURSOR_STYLE: &str = "|";

/// Style class attached to the cursor glyph. Renderers map it to a blink.
pub const CURSOR_CLASS: &str = "blinking-cursor";

/// Presentation options that do not affect the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewProps {
    /// Show a cursor glyph after the text
    pub cursor: bool,
    /// Cursor glyph
    pub cursor_style: String,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self { cursor: false, cursor_style: DEFAULT_CURSOR_STYLE.to_string() }
    }
}

impl ViewProps {
    /// Props with the cursor enabled and the given glyph.
    pub fn with_cursor(cursor_style: impl Into<String>) -> Self {
        Self { cursor: true, cursor_style: cursor_style.into() }
    }
}

/// Cursor glyph tagged for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorGlyph {
    /// Characters to draw
    pub glyph: String,
    /// Style class, always [`CURSOR_CLASS`]
    pub class: &'static str,
}

/// Renderable output: `[text][cursor]?`, adjacent, nothing in between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    /// Visible part of the active word
    pub text: String,
    /// Cursor glyph, if enabled
    pub cursor: Option<CursorGlyph>,
}

impl Fragment {
    /// Build the fragment for `text` under `props`.
    pub fn new(text: &str, props: &ViewProps) -> Self {
        let cursor = props
            .cursor
            .then(|| CursorGlyph { glyph: props.cursor_style.clone(), class: CURSOR_CLASS });
        Self { text: text.to_string(), cursor }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if let Some(cursor) = &self.cursor {
            f.write_str(&cursor.glyph)?;
        }
        Ok(())
    }
}

/// Engine plus presentation props.
///
/// Every animation option goes to the engine untouched; the view only adds
/// the cursor.
#[derive(Debug)]
pub struct TypewriterView<H = NoopHooks, I = Instant>
where
    I: ClockInstant,
{
    engine: Engine<H, I>,
    props: ViewProps,
}

impl<H, I> TypewriterView<H, I>
where
    H: Hooks,
    I: ClockInstant,
{
    /// Create the view and start its engine at `now`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn new(
        config: TypewriterConfig,
        props: ViewProps,
        hooks: H,
        now: I,
    ) -> Result<Self, ConfigError> {
        let engine = Engine::new(config, hooks, now)?;
        Ok(Self { engine, props })
    }

    /// Poll the engine at `now` and build the fragment.
    ///
    /// # Errors
    ///
    /// Propagates hook failures from the engine.
    pub fn render(&mut self, now: I) -> Result<Fragment, EngineError> {
        let text = self.engine.poll(now)?;
        Ok(Fragment::new(text, &self.props))
    }

    /// Fragment for the current text, without advancing.
    pub fn fragment(&self) -> Fragment {
        Fragment::new(self.engine.text(), &self.props)
    }

    /// Presentation props.
    pub fn props(&self) -> &ViewProps {
        &self.props
    }

    /// Replace presentation props. The animation is unaffected.
    pub fn set_props(&mut self, props: ViewProps) {
        self.props = props;
    }

    /// Underlying engine.
    pub fn engine(&self) -> &Engine<H, I> {
        &self.engine
    }

    /// Underlying engine, mutably (reconfigure, cancel).
    pub fn engine_mut(&mut self) -> &mut Engine<H, I> {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use insta::assert_snapshot;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn cursor_is_adjacent_to_text() {
        let fragment = Fragment::new("Hel", &ViewProps::with_cursor("_"));

        assert_snapshot!(fragment.to_string(), @"Hel_");
        assert_eq!(fragment.cursor.map(|c| c.class), Some(CURSOR_CLASS));
    }

    #[test]
    fn no_cursor_by_default() {
        let fragment = Fragment::new("Hel", &ViewProps::default());

        assert_eq!(fragment.cursor, None);
        assert_eq!(fragment.to_string(), "Hel");
    }

    #[test]
    fn empty_text_still_shows_cursor() {
        let fragment = Fragment::new("", &ViewProps::with_cursor(DEFAULT_CURSOR_STYLE));
        assert_eq!(fragment.to_string(), "|");
    }

    #[test]
    fn render_forwards_to_engine() {
        let t0 = Instant::now();
        let config = TypewriterConfig::new(["Hi"]).with_type_speed(ms(10));
        let mut view =
            TypewriterView::new(config, ViewProps::with_cursor("|"), NoopHooks, t0).unwrap();

        assert_eq!(view.render(t0).unwrap().to_string(), "|");
        assert_eq!(view.render(t0 + ms(10)).unwrap().to_string(), "H|");
        assert_eq!(view.fragment().to_string(), "H|");
        assert_eq!(view.engine().config().type_speed, ms(10));
    }

    #[test]
    fn set_props_does_not_touch_animation() {
        let t0 = Instant::now();
        let mut view =
            TypewriterView::new(TypewriterConfig::new(["Hi"]), ViewProps::default(), NoopHooks, t0)
                .unwrap();
        let deadline = view.engine().deadline();

        view.set_props(ViewProps::with_cursor("▌"));

        assert_eq!(view.engine().deadline(), deadline);
        assert_eq!(view.fragment().to_string(), "▌");
    }
}
