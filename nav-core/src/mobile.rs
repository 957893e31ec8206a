//! Mobile Menu Toggle
//!
//! Open/closed state of the mobile menu and the class changes that move it
//! between the two. The front-end script applies the steps in order, waiting
//! each step's delay after the previous one.

use crate::config::NavConfig;

pub const BODY_OPEN_CLASS: &str = "menu-open";
pub const LIST_VISIBLE_CLASS: &str = "visible";
pub const LIST_ANIM_CLASS: &str = "anim";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

/// Element a class change applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassTarget {
    Body,
    /// The menu's `<ul>`
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOp {
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStep {
    /// Wait before this step, relative to the previous one
    pub delay_ms: u32,
    pub target: ClassTarget,
    pub op: ClassOp,
    pub class: &'static str,
}

impl ClassStep {
    const fn new(delay_ms: u32, target: ClassTarget, op: ClassOp, class: &'static str) -> Self {
        Self { delay_ms, target, op, class }
    }
}

impl MobileMenu {
    /// Derive the current state from the body's class list
    pub fn from_body_open(body_open: bool) -> Self {
        if body_open {
            MobileMenu::Open
        } else {
            MobileMenu::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MobileMenu::Open)
    }

    /// Next state plus the class changes that get there
    pub fn toggle(self, config: &NavConfig) -> (MobileMenu, Vec<ClassStep>) {
        use ClassOp::*;
        use ClassTarget::*;

        match self {
            MobileMenu::Closed => (
                MobileMenu::Open,
                vec![
                    ClassStep::new(0, Body, Add, BODY_OPEN_CLASS),
                    ClassStep::new(0, List, Add, LIST_VISIBLE_CLASS),
                    ClassStep::new(config.open_delay_ms, List, Add, LIST_ANIM_CLASS),
                ],
            ),
            MobileMenu::Open => (
                MobileMenu::Closed,
                vec![
                    ClassStep::new(0, List, Remove, LIST_ANIM_CLASS),
                    ClassStep::new(config.close_delay_ms, Body, Remove, BODY_OPEN_CLASS),
                    ClassStep::new(0, List, Remove, LIST_VISIBLE_CLASS),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_adds_anim_last() {
        let (next, steps) = MobileMenu::Closed.toggle(&NavConfig::default());
        assert_eq!(next, MobileMenu::Open);
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.op == ClassOp::Add));
        assert_eq!(steps[2].class, LIST_ANIM_CLASS);
        assert_eq!(steps[2].delay_ms, 10);
    }

    #[test]
    fn test_close_waits_for_transition() {
        let (next, steps) = MobileMenu::Open.toggle(&NavConfig::default());
        assert_eq!(next, MobileMenu::Closed);
        assert_eq!(steps[0], ClassStep::new(0, ClassTarget::List, ClassOp::Remove, LIST_ANIM_CLASS));
        assert_eq!(steps[1].delay_ms, 300);
        assert_eq!(steps[1].target, ClassTarget::Body);
        assert_eq!(steps[2].delay_ms, 0);
    }

    #[test]
    fn test_round_trip_restores_classes() {
        let config = NavConfig::default();
        let (open, opening) = MobileMenu::Closed.toggle(&config);
        let (closed, closing) = open.toggle(&config);
        assert_eq!(closed, MobileMenu::Closed);

        let added: Vec<_> = opening.iter().map(|s| (s.target, s.class)).collect();
        let mut removed: Vec<_> = closing.iter().map(|s| (s.target, s.class)).collect();
        for step in &added {
            let pos = removed.iter().position(|r| r == step).expect("every added class is removed");
            removed.remove(pos);
        }
        assert!(removed.is_empty());
    }

    #[test]
    fn test_state_from_body() {
        assert!(MobileMenu::from_body_open(true).is_open());
        assert!(!MobileMenu::from_body_open(false).is_open());
    }
}
