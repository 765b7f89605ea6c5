// turf/src/global_prefs.rs
// Global preferences for the app (not session data)
use std::path::{Path, PathBuf};
use std::fs;
use serde::{Serialize, Deserialize};
use once_cell::sync::OnceCell;
use std::sync::RwLock;
use tracing::{debug, warn};

use crate::state::{AppError, AppResult};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GlobalPrefs {
    pub sound_effects_enabled: bool,
    pub banner_glitch_enabled: bool,
    pub tick_rate_ms: u64,
    pub default_vibe: u8,
}

impl Default for GlobalPrefs {
    fn default() -> Self {
        Self {
            sound_effects_enabled: true,
            banner_glitch_enabled: true,
            tick_rate_ms: 50,
            default_vibe: 50,
        }
    }
}

impl GlobalPrefs {
    /// `$TURF_PREFS`, otherwise `~/.turf_prefs.json`.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("TURF_PREFS") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".turf_prefs.json")
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let data = fs::read_to_string(path)?;
        let mut prefs: Self = serde_json::from_str(&data).map_err(|e| AppError::Prefs(e.to_string()))?;
        prefs.default_vibe = prefs.default_vibe.min(100);
        prefs.tick_rate_ms = prefs.tick_rate_ms.max(10);
        Ok(prefs)
    }

    /// Missing or unreadable files fall back to defaults.
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(prefs) => prefs,
            Err(AppError::IO(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring preferences file");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let data = serde_json::to_string_pretty(self).map_err(|e| AppError::Prefs(e.to_string()))?;
        fs::write(path, data)?;
        Ok(())
    }
}

static GLOBAL_PREFS: OnceCell<RwLock<GlobalPrefs>> = OnceCell::new();

pub fn init_global_prefs(path: &Path) -> GlobalPrefs {
    let prefs = GlobalPrefs::load(path);
    GLOBAL_PREFS.set(RwLock::new(prefs.clone())).ok();
    prefs
}

/// Current preferences, or defaults before `init_global_prefs` ran.
pub fn global_prefs() -> GlobalPrefs {
    GLOBAL_PREFS
        .get()
        .and_then(|lock| lock.read().ok().map(|prefs| prefs.clone()))
        .unwrap_or_default()
}

/// Applies `change` to the global preferences and writes them to `path`.
pub fn update_global_prefs(path: &Path, change: impl FnOnce(&mut GlobalPrefs)) -> AppResult<GlobalPrefs> {
    let lock = GLOBAL_PREFS.get_or_init(|| RwLock::new(GlobalPrefs::default()));
    let mut prefs = lock.write().map_err(|_| AppError::Prefs("preferences lock poisoned".to_string()))?;
    change(&mut prefs);
    prefs.save_to(path)?;
    Ok(prefs.clone())
}
