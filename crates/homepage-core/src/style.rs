//! Inline style state of a single page element.
//!
//! Only the properties the behaviors write are tracked. Anything left
//! `Unset` falls back to the stylesheet when rendered.

use std::fmt::Write as _;

/// Value of the `display` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline value; stylesheet decides
    #[default]
    Unset,
    /// `display: block`
    Block,
    /// `display: none`
    None,
}

/// Value of the `grid-column` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridColumn {
    /// No inline value; the item occupies one grid cell
    #[default]
    Unset,
    /// `grid-column: 1 / -1`, spanning the whole row
    FullWidth,
}

/// Inline style of one element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleState {
    pub display: Display,
    pub grid_column: GridColumn,
    pub transform: Option<&'static str>,
    pub box_shadow: Option<&'static str>,
}

impl StyleState {
    /// Create an element style with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the element is rendered (anything but `display: none`)
    pub fn is_visible(&self) -> bool {
        self.display != Display::None
    }

    /// Whether the element spans the full grid row
    pub fn is_full_width(&self) -> bool {
        self.grid_column == GridColumn::FullWidth
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        match self.display {
            Display::Unset => {}
            Display::Block => css.push_str("display: block;"),
            Display::None => css.push_str("display: none;"),
        }
        if self.grid_column == GridColumn::FullWidth {
            css.push_str(" grid-column: 1 / -1;");
        }
        if let Some(transform) = self.transform {
            let _ = write!(css, " transform: {};", transform);
        }
        if let Some(shadow) = self.box_shadow {
            let _ = write!(css, " box-shadow: {};", shadow);
        }
        css.trim_start().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_renders_nothing() {
        assert_eq!(StyleState::new().to_css(), "");
        assert!(StyleState::new().is_visible());
    }

    #[test]
    fn renders_all_properties() {
        let style = StyleState {
            display: Display::Block,
            grid_column: GridColumn::FullWidth,
            transform: Some("scale(1.05)"),
            box_shadow: Some("0 6px 15px rgba(0,0,0,0.1)"),
        };
        assert_eq!(
            style.to_css(),
            "display: block; grid-column: 1 / -1; transform: scale(1.05); box-shadow: 0 6px 15px rgba(0,0,0,0.1);"
        );
    }

    #[test]
    fn hidden_is_not_visible() {
        let style = StyleState {
            display: Display::None,
            ..Default::default()
        };
        assert!(!style.is_visible());
        assert_eq!(style.to_css(), "display: none;");
    }
}
