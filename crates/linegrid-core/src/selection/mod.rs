//! Multi-cell selection: the selected set, anchor and focus, plus the
//! pointer and keyboard gestures that drive them.

mod model;
mod navigate;

pub use model::{SelectionModel, SelectionState};
pub use navigate::{NavKey, nav_target, navigate};

use std::ops::BitOr;

/// Modifier keys held during a click or key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };

    pub fn is_none(&self) -> bool {
        !self.shift && !self.ctrl
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers {
            shift: self.shift || rhs.shift,
            ctrl: self.ctrl || rhs.ctrl,
        }
    }
}
