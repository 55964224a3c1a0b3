//! Menu entry representation shared with the host

use std::fmt;

/// Action kind attached to a menu entry.
///
/// Only the kinds the engine treats specially get their own variant; any
/// other host id round-trips through `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Walk,
    WidgetTarget,
    CcOp,
    ExamineObject,
    ExamineNpc,
    ExamineItemGround,
    Cancel,
    CcOpLowPriority,
    Runelite,
    Other(u16),
}

impl MenuAction {
    /// Creates from the host's raw id
    pub fn from_id(id: u16) -> Self {
        match id {
            23 => MenuAction::Walk,
            25 => MenuAction::WidgetTarget,
            57 => MenuAction::CcOp,
            1002 => MenuAction::ExamineObject,
            1003 => MenuAction::ExamineNpc,
            1004 => MenuAction::ExamineItemGround,
            1006 => MenuAction::Cancel,
            1007 => MenuAction::CcOpLowPriority,
            1500 => MenuAction::Runelite,
            other => MenuAction::Other(other),
        }
    }

    /// Gets the host's raw id
    pub fn id(&self) -> u16 {
        match self {
            MenuAction::Walk => 23,
            MenuAction::WidgetTarget => 25,
            MenuAction::CcOp => 57,
            MenuAction::ExamineObject => 1002,
            MenuAction::ExamineNpc => 1003,
            MenuAction::ExamineItemGround => 1004,
            MenuAction::Cancel => 1006,
            MenuAction::CcOpLowPriority => 1007,
            MenuAction::Runelite => 1500,
            MenuAction::Other(id) => *id,
        }
    }

    /// Checks if the client opens the menu instead of running this action
    /// when it ends up as the left-click entry
    pub fn is_low_priority(&self) -> bool {
        matches!(self, MenuAction::CcOpLowPriority)
    }

    /// The equivalent kind that is safe to leave at the top of the menu
    pub fn normal_priority(self) -> Self {
        match self {
            MenuAction::CcOpLowPriority => MenuAction::CcOp,
            other => other,
        }
    }
}

/// One selectable menu action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Option label, may contain formatting tags
    pub option: String,
    /// Target label, may contain formatting tags
    pub target: String,
    /// Action kind, rewritten by the engine in one case
    pub kind: MenuAction,
}

impl MenuEntry {
    pub fn new(option: impl Into<String>, target: impl Into<String>, kind: MenuAction) -> Self {
        Self {
            option: option.into(),
            target: target.into(),
            kind,
        }
    }

    /// Creates a `CcOp` entry, the most common kind in tests and fixtures
    pub fn op(option: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(option, target, MenuAction::CcOp)
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.option, self.target)
    }
}
