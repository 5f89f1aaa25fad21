//! Pointer-enter/leave emphasis effects.
//!
//! Every hoverable element follows the same pattern: entering applies an
//! elevated style, leaving restores the base style. Both states are fixed,
//! so repeated events always land on one of the two.

use crate::style::StyleState;

/// The two hover gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Enter,
    Leave,
}

/// Transform and shadow applied for one pointer state.
///
/// A `None` shadow leaves the element's shadow untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub transform: &'static str,
    pub box_shadow: Option<&'static str>,
}

/// A symmetric hover effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEffect {
    pub enter: HoverStyle,
    pub leave: HoverStyle,
}

impl HoverEffect {
    /// Gallery items grow slightly
    pub const GALLERY_ITEM: HoverEffect = HoverEffect {
        enter: HoverStyle {
            transform: "scale(1.05)",
            box_shadow: None,
        },
        leave: HoverStyle {
            transform: "scale(1)",
            box_shadow: None,
        },
    };

    /// The clock widget lifts off the page
    pub const CLOCK: HoverEffect = HoverEffect {
        enter: HoverStyle {
            transform: "translateY(-5px)",
            box_shadow: Some("0 15px 40px rgba(0, 0, 0, 0.3)"),
        },
        leave: HoverStyle {
            transform: "translateY(0)",
            box_shadow: Some("0 10px 30px rgba(0, 0, 0, 0.2)"),
        },
    };

    /// Image nested inside a family card
    pub const FAMILY_IMAGE: HoverEffect = HoverEffect {
        enter: HoverStyle {
            transform: "scale(1.05)",
            box_shadow: Some("0 10px 25px rgba(0,0,0,0.15)"),
        },
        leave: HoverStyle {
            transform: "scale(1)",
            box_shadow: Some("0 6px 15px rgba(0,0,0,0.1)"),
        },
    };

    /// Profile image grows and tilts
    pub const PROFILE_IMAGE: HoverEffect = HoverEffect {
        enter: HoverStyle {
            transform: "scale(1.05) rotate(5deg)",
            box_shadow: Some("0 15px 40px rgba(52, 152, 219, 0.4)"),
        },
        leave: HoverStyle {
            transform: "scale(1) rotate(0deg)",
            box_shadow: Some("0 10px 30px rgba(52, 152, 219, 0.3)"),
        },
    };

    /// Style for the given pointer state
    pub fn style_for(&self, pointer: Pointer) -> HoverStyle {
        match pointer {
            Pointer::Enter => self.enter,
            Pointer::Leave => self.leave,
        }
    }

    /// Write the pointer state's transform and shadow onto `style`
    pub fn apply(&self, style: &mut StyleState, pointer: Pointer) {
        let target = self.style_for(pointer);
        style.transform = Some(target.transform);
        if let Some(shadow) = target.box_shadow {
            style.box_shadow = Some(shadow);
        }
    }
}
