use std::sync::atomic::{AtomicBool, Ordering};

/// How positions and pieces are rendered: Chinese glyphs or doubled FEN
/// letters, with or without ANSI effects, one-line or full board.
#[derive(Copy, Clone)]
pub struct DisplayFormat {
    pub chinese: bool,
    pub effects: bool,
    pub concise: bool,
}

// Process-wide defaults so a binary picks a rendering once and every later
// `Display` respects it.
static DEFAULT_CHINESE: AtomicBool = AtomicBool::new(true);
static DEFAULT_EFFECTS: AtomicBool = AtomicBool::new(true);

impl DisplayFormat {
    /// Full-board rendering with the process defaults.
    pub fn pretty() -> Self {
        Self {
            chinese: DEFAULT_CHINESE.load(Ordering::Relaxed),
            effects: DEFAULT_EFFECTS.load(Ordering::Relaxed),
            concise: false,
        }
    }

    /// One-line, effect-free rendering; what plain `Display` impls use.
    pub fn terse() -> Self {
        Self {
            effects: false,
            concise: true,
            ..Self::pretty()
        }
    }

    pub fn with_concise(&self, concise: bool) -> Self {
        Self { concise, ..*self }
    }

    pub fn set_defaults(chinese: bool, effects: bool) {
        DEFAULT_CHINESE.store(chinese, Ordering::Relaxed);
        DEFAULT_EFFECTS.store(effects, Ordering::Relaxed);
    }
}
