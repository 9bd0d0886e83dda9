use std::{cell::Cell, rc::Rc};

use crate::Theme;

/// Owner of the theme; the only place where it can be changed.
#[derive(Debug, Default)]
pub struct ThemeSwitch(Rc<Cell<Theme>>);

/// Read-only view on the current theme, handed to each view.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext(Rc<Cell<Theme>>);

impl ThemeSwitch {
    pub fn new(initial: Theme) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    pub fn context(&self) -> ThemeContext {
        ThemeContext(Rc::clone(&self.0))
    }

    pub fn toggle(&self) -> Theme {
        let next = self.0.get().toggled();
        self.0.set(next);
        log::debug!("Switched to {next} theme");
        next
    }
}

impl ThemeContext {
    pub fn current(&self) -> Theme {
        self.0.get()
    }
}
