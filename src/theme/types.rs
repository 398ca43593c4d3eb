use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for interactive highlights (digit keys).
    pub sapphire: Color,
    /// Accent color for headings and operator keys.
    pub mauve: Color,
    /// Success/positive state color (equals key).
    pub green: Color,
    /// Warning/attention state color (pending line).
    pub yellow: Color,
    /// Error/danger state color (clear keys, alerts).
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Decimal places results are rounded to; `None` keeps raw number formatting.
    pub result_precision: Option<u8>,
    /// Show the history pane next to the keypad.
    pub show_history_pane: bool,
    /// Show the key binding hints in the bottom line.
    pub show_keybinds_footer: bool,
    /// Persist history to disk; when false the history lives only for the session.
    pub persist_history: bool,
    /// Override for the history file location.
    pub history_file: Option<PathBuf>,
    /// Configurable key bindings parsed from `settings.conf`.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            result_precision: None,
            show_history_pane: true,
            show_keybinds_footer: true,
            persist_history: true,
            history_file: None,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Return a short display label such as "Ctrl+X", "F1", "?".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) if parts.is_empty() => ch.to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Insert => "Ins".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }

    /// Whether this chord matches a pressed key.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        let code = match code {
            KeyCode::Char(ch) => KeyCode::Char(ch.to_ascii_lowercase()),
            other => other,
        };
        // Shift is implied by the character for printable keys like '?'
        let mods = if matches!(code, KeyCode::Char(_)) {
            mods.difference(KeyModifiers::SHIFT)
        } else {
            mods
        };
        self.code == code && self.mods == mods
    }
}

/// Application key bindings. Each action can have multiple chords.
///
/// Calculator keys (digits, operators, Enter, Esc, Backspace) are fixed; only the
/// application-level actions below are configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Open the help overlay.
    pub help_overlay: Vec<KeyChord>,
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Empty the calculation history.
    pub clear_history: Vec<KeyChord>,
}

impl KeyMap {
    /// Whether any chord in `list` matches the pressed key.
    #[must_use]
    pub fn any_matches(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        list.iter().any(|c| c.matches(code, mods))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let none = KeyModifiers::empty();
        let ctrl = KeyModifiers::CONTROL;
        Self {
            help_overlay: vec![
                KeyChord {
                    code: KeyCode::F(1),
                    mods: none,
                },
                KeyChord {
                    code: KeyCode::Char('?'),
                    mods: none,
                },
            ],
            exit: vec![
                KeyChord {
                    code: KeyCode::Char('c'),
                    mods: ctrl,
                },
                KeyChord {
                    code: KeyCode::Char('q'),
                    mods: none,
                },
            ],
            clear_history: vec![KeyChord {
                code: KeyCode::Char('x'),
                mods: ctrl,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Chord labels and matching handle modifiers and shifted characters.
    ///
    /// Inputs:
    /// - Default keymap chords; key presses with and without Shift.
    ///
    /// Output:
    /// - Labels `Ctrl+X`, `F1`, `?`; `?` typed with Shift still matches.
    fn chord_labels_and_matching() {
        let km = KeyMap::default();
        assert_eq!(km.clear_history[0].label(), "Ctrl+X");
        assert_eq!(km.help_overlay[0].label(), "F1");
        assert_eq!(km.help_overlay[1].label(), "?");
        assert!(KeyMap::any_matches(
            &km.help_overlay,
            KeyCode::Char('?'),
            KeyModifiers::SHIFT
        ));
        assert!(KeyMap::any_matches(
            &km.exit,
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ));
        assert!(!KeyMap::any_matches(
            &km.exit,
            KeyCode::Char('c'),
            KeyModifiers::empty()
        ));
    }
}
