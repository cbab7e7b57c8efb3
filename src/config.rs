//! User configuration — keybindings, startup widget and catalog path.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/textual-dissect/config.toml`
//! (default `~/.config/textual-dissect/config.toml`).

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    NextPane,
    PrevPane,
    FocusParent,
    Quit,
}

impl Action {
    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),
            "select" => Some(Action::Select),
            "next_pane" => Some(Action::NextPane),
            "prev_pane" => Some(Action::PrevPane),
            "focus_parent" => Some(Action::FocusParent),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A key code plus modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let significant = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code
            && self.modifiers.intersection(significant) == event.modifiers.intersection(significant)
    }
}

const MODIFIER_NAMES: [(KeyModifiers, &str); 3] = [
    (KeyModifiers::CONTROL, "Ctrl"),
    (KeyModifiers::ALT, "Alt"),
    (KeyModifiers::SHIFT, "Shift"),
];

const NAMED_KEYS: [(&str, KeyCode); 13] = [
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("enter", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("backspace", KeyCode::Backspace),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
];

/// Short status-bar label, e.g. `Tab`, `Ctrl+p`, `↑`.
impl fmt::Display for KeyBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (modifier, name) in MODIFIER_NAMES {
            // BackTab already implies shift.
            if self.modifiers.contains(modifier) && self.code != KeyCode::BackTab {
                write!(f, "{name}+")?;
            }
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Up => f.write_str("↑"),
            KeyCode::Down => f.write_str("↓"),
            KeyCode::Left => f.write_str("←"),
            KeyCode::Right => f.write_str("→"),
            KeyCode::Tab | KeyCode::BackTab => f.write_str("Tab"),
            KeyCode::Backspace => f.write_str("Bksp"),
            KeyCode::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Accepts `Ctrl+c`, `Alt+Up`, `q`, `Enter`, `F5` and the like.
impl FromStr for KeyBind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, key) = match s.rsplit_once('+') {
            // A bare `+` is the plus key itself.
            Some((prefix, "")) => (prefix.strip_suffix('+').unwrap_or(prefix), "+"),
            Some(split) => split,
            None => ("", s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.split('+').filter(|p| !p.is_empty()) {
            let (modifier, _) = MODIFIER_NAMES
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(part))
                .ok_or(())?;
            modifiers |= *modifier;
        }

        let lower = key.to_ascii_lowercase();
        let alias = match lower.as_str() {
            "return" => "enter",
            "escape" => "esc",
            "bksp" => "backspace",
            "pgup" => "pageup",
            "pgdn" => "pagedown",
            other => other,
        };
        let named = NAMED_KEYS.iter().find(|(name, _)| *name == alias);

        let code = if let Some(&(_, code)) = named {
            code
        } else if lower == "space" {
            KeyCode::Char(' ')
        } else if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse().ok()) {
            KeyCode::F(n)
        } else {
            // Single characters keep their case: `P` and `p` differ.
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(()),
            }
        };

        Ok(Self::new(code, modifiers))
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Class focused at startup when none is named on the command line.
    pub default_widget: Option<String>,
    /// Catalog file used instead of the bundled one.
    pub catalog: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            default_widget: None,
            catalog: None,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Select, vec![KeyBind::new(Enter, n), KeyBind::new(Right, n)]);
        m.insert(NextPane, vec![KeyBind::new(Tab, n)]);
        m.insert(
            PrevPane,
            vec![KeyBind::new(BackTab, KeyModifiers::SHIFT), KeyBind::new(BackTab, n)],
        );
        m.insert(FocusParent, vec![KeyBind::new(Char('p'), n), KeyBind::new(Left, n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action bound to a key event.  The binding with the most
    /// modifiers wins when several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |bind| (action, bind)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        self.bindings
            .get(&action)
            .and_then(|binds| binds.first())
            .map_or_else(|| "?".to_string(), KeyBind::to_string)
    }

    /// Status-bar hint built from the current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: move | {}: inspect | {}: parent | {}: next pane | {}: quit",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::Select),
            self.short_binding(Action::FocusParent),
            self.short_binding(Action::NextPane),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "default_widget" => {
                    config.default_widget = (!value.is_empty()).then(|| value.to_string());
                    continue;
                }
                "catalog" => {
                    config.catalog = (!value.is_empty()).then(|| PathBuf::from(value));
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!(key, "ignoring unknown config key");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| part.trim().trim_matches('"').parse().ok())
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }
}

/// `$XDG_CONFIG_HOME/textual-dissect/config.toml`.
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}
