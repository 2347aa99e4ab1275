//! Theme service
//!
//! Owns the live theme state: loads it once from the preference store,
//! mutates it only through explicit setters, persists every change and
//! pushes the result to the presentation surface.

use crate::colors::{generate_shades, ColorRole, BASE_STEP, SHADE_KEYS};
use crate::store::{PreferenceStore, COLORS_KEY, MODE_KEY};
use crate::surface::{PresentationSurface, DARK_CLASS, THEME_ATTRIBUTE};
use crate::system::{self, Subscription, SystemPreference};
use crate::theme::{CustomColors, ThemeMode, ThemeSnapshot};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, warn};

struct Inner {
    mode: ThemeMode,
    colors: CustomColors,
    store: Box<dyn PreferenceStore>,
    surface: Box<dyn PresentationSurface>,
}

impl Inner {
    fn load(&mut self) {
        if let Some(raw) = self.store.get(MODE_KEY) {
            match raw.parse::<ThemeMode>() {
                Ok(mode) => self.mode = mode,
                Err(e) => warn!(error = %e, "Ignoring stored theme mode"),
            }
        }

        if let Some(raw) = self.store.get(COLORS_KEY) {
            match serde_json::from_str::<CustomColors>(&raw) {
                Ok(colors) => self.colors = colors,
                Err(e) => warn!(error = %e, "Failed to parse saved theme colors"),
            }
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "Failed to persist theme preference");
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key, error = %e, "Failed to remove theme preference");
        }
    }

    fn set_mode(&mut self, mode: ThemeMode, system_prefers_dark: bool) {
        self.mode = mode;
        self.persist(MODE_KEY, mode.as_str());
        self.apply_darkness(mode.is_dark(system_prefers_dark));
    }

    fn apply_darkness(&self, dark: bool) {
        debug!(mode = %self.mode, dark, "Applying theme");
        if dark {
            self.surface.set_attribute(THEME_ATTRIBUTE, "dark");
            self.surface.add_class(DARK_CLASS);
        } else {
            self.surface.remove_attribute(THEME_ATTRIBUTE);
            self.surface.remove_class(DARK_CLASS);
        }
    }

    fn apply_custom_colors(&self) {
        for role in ColorRole::ALL {
            let Some(base) = self.colors.get(role) else {
                continue;
            };

            self.surface.set_property(&role.property_name(BASE_STEP), base);
            for (name, value) in generate_shades(base, role).custom_properties(role) {
                self.surface.set_property(&name, &value);
            }
        }
    }

    fn clear_custom_colors(&self) {
        for role in ColorRole::ALL {
            for key in SHADE_KEYS {
                self.surface.remove_property(&role.property_name(key));
            }
        }
    }
}

/// Process-wide theme state, constructed explicitly and handed to consumers
pub struct ThemeService {
    inner: Arc<Mutex<Inner>>,
    system: Arc<dyn SystemPreference>,
    watcher: Mutex<Option<Subscription>>,
}

impl ThemeService {
    /// Load the theme from `store` and apply it to `surface`.
    ///
    /// Missing or malformed stored values fall back to the defaults
    /// (light mode, no custom colors).
    pub fn new(
        store: impl PreferenceStore + 'static,
        surface: impl PresentationSurface + 'static,
        system: Arc<dyn SystemPreference>,
    ) -> Self {
        let mut inner = Inner {
            mode: ThemeMode::default(),
            colors: CustomColors::default(),
            store: Box::new(store),
            surface: Box::new(surface),
        };

        inner.load();
        inner.apply_darkness(inner.mode.is_dark(system.prefers_dark()));
        inner.apply_custom_colors();

        debug!(mode = %inner.mode, colors = ?inner.colors, "Theme initialized");

        Self {
            inner: Arc::new(Mutex::new(inner)),
            system,
            watcher: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        self.lock().mode
    }

    /// Current custom colors
    pub fn colors(&self) -> CustomColors {
        self.lock().colors.clone()
    }

    /// Whether the theme currently renders dark
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark(self.system.prefers_dark())
    }

    /// Mode, darkness and colors resolved together
    pub fn current_theme(&self) -> ThemeSnapshot {
        let (mode, colors) = {
            let inner = self.lock();
            (inner.mode, inner.colors.clone())
        };
        ThemeSnapshot {
            mode,
            is_dark: mode.is_dark(self.system.prefers_dark()),
            colors,
        }
    }

    /// Set and persist the theme mode
    pub fn set_mode(&self, mode: ThemeMode) {
        let prefers_dark = self.system.prefers_dark();
        self.lock().set_mode(mode, prefers_dark);
    }

    /// Replace the custom colors. Fields left out are cleared, not kept.
    pub fn set_colors(&self, colors: CustomColors) {
        let mut inner = self.lock();
        inner.colors = colors;

        match serde_json::to_string(&inner.colors) {
            Ok(json) => inner.persist(COLORS_KEY, &json),
            Err(e) => warn!(error = %e, "Failed to encode theme colors"),
        }

        inner.apply_custom_colors();
    }

    /// Light becomes dark; dark and system become light
    pub fn toggle(&self) {
        let prefers_dark = self.system.prefers_dark();
        let mut inner = self.lock();
        let next = inner.mode.toggled();
        inner.set_mode(next, prefers_dark);
    }

    /// Restore light mode with no custom colors and forget the stored values
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.mode = ThemeMode::default();
        inner.colors = CustomColors::default();
        inner.forget(MODE_KEY);
        inner.forget(COLORS_KEY);
        inner.apply_darkness(false);
        inner.clear_custom_colors();
        debug!("Theme reset to defaults");
    }

    /// Modes a user can choose from, in presentation order
    pub fn available_modes(&self) -> &'static [ThemeMode] {
        &ThemeMode::ALL
    }

    /// Follow system preference changes while the mode is `system`.
    ///
    /// Idempotent: returns `false` if already watching. The subscription is
    /// released by [`stop_watching`](Self::stop_watching) or when the service
    /// is dropped.
    pub fn watch_system_preference(&self) -> bool {
        let mut watcher = self.watcher.lock().unwrap_or_else(PoisonError::into_inner);
        if watcher.is_some() {
            return false;
        }

        let inner: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        let subscription = system::subscribe(&self.system, move |prefers_dark| {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            if inner.mode == ThemeMode::System {
                inner.apply_darkness(prefers_dark);
            }
        });

        debug!(id = subscription.id(), "Watching system preference");
        *watcher = Some(subscription);
        true
    }

    /// Release the system preference subscription. Returns `false` if not watching.
    pub fn stop_watching(&self) -> bool {
        self.watcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    pub fn is_watching(&self) -> bool {
        self.watcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ThemeService")
            .field("mode", &inner.mode)
            .field("colors", &inner.colors)
            .field("watching", &self.is_watching())
            .finish()
    }
}
