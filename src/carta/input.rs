//! Platform-neutral input events.
//!
//! The binding layer translates DOM events into these values before calling a
//! transition, so the state machines never see a platform type.

/// Keys the page reacts to. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Keys that activate a focused card, same as a pointer click.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    /// The dialog cancel key. The browser closes an open modal on it by itself.
    pub fn dismisses(self) -> bool {
        matches!(self, Key::Escape)
    }
}

/// What the binding layer must do with a key event after the transition ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// The key was consumed; its default action (e.g. scrolling on space)
    /// must be suppressed.
    PreventDefault,
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyOutcome::PreventDefault)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Client-space bounding box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map_to_variants() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }

    #[test]
    fn only_enter_and_space_activate() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Escape.activates());
        assert!(!Key::Other.activates());
    }

    #[test]
    fn only_escape_dismisses() {
        assert!(Key::from_dom("Esc").dismisses());
        assert!(!Key::Enter.dismisses());
        assert!(!Key::Other.dismisses());
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 60.0)));
        assert!(rect.contains(Point::new(50.0, 30.0)));
        assert!(!rect.contains(Point::new(9.9, 30.0)));
        assert!(!rect.contains(Point::new(50.0, 60.1)));
    }
}
