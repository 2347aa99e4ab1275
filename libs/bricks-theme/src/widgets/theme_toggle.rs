//! Theme mode selector

use crate::service::ThemeService;
use crate::theme::ThemeMode;

/// Mode selector bound to a theme service
#[derive(Debug, Clone, Copy)]
pub struct ThemeToggle<'a> {
    service: &'a ThemeService,
}

impl<'a> ThemeToggle<'a> {
    pub fn new(service: &'a ThemeService) -> Self {
        Self { service }
    }

    /// Modes to offer, with whether each is the current selection
    pub fn options(&self) -> Vec<(ThemeMode, bool)> {
        let current = self.service.mode();
        self.service
            .available_modes()
            .iter()
            .map(|&mode| (mode, mode == current))
            .collect()
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.service.set_mode(mode);
    }

    pub fn is_active(&self, mode: ThemeMode) -> bool {
        self.service.mode() == mode
    }
}
