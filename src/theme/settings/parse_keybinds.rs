use crate::theme::parsing::{parse_key_chord, split_key_value};
use crate::theme::types::{KeyChord, Settings};

/// What: Add a parsed key chord to a keymap field, replacing defaults on first use.
///
/// Inputs:
/// - `chord`: Parsed key chord.
/// - `target`: Keymap field to update.
/// - `replaced`: Whether this field was already overridden during this parse.
///
/// Details:
/// - The first binding for a field replaces the defaults; later lines for the same
///   field add further chords, skipping duplicates.
fn assign_keybind(chord: KeyChord, target: &mut Vec<KeyChord>, replaced: &mut bool) {
    if !*replaced {
        target.clear();
        *replaced = true;
    }
    if !target.contains(&chord) {
        target.push(chord);
    }
}

/// What: Parse `keybind_*` entries from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file.
/// - `settings`: Settings whose keymap is updated.
///
/// Details:
/// - Unparsable chords are logged and leave the defaults in place.
pub fn parse_keybinds(content: &str, settings: &mut Settings) {
    let mut replaced = [false; 3];
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        if !key.starts_with("keybind_") {
            continue;
        }
        let Some(chord) = parse_key_chord(val) else {
            tracing::debug!(key = %key, value = %val, "[Config] Invalid key chord");
            continue;
        };
        let km = &mut settings.keymap;
        match key.as_str() {
            "keybind_help" | "keybind_help_overlay" => {
                assign_keybind(chord, &mut km.help_overlay, &mut replaced[0]);
            }
            "keybind_exit" | "keybind_quit" => {
                assign_keybind(chord, &mut km.exit, &mut replaced[1]);
            }
            "keybind_clear_history" => {
                assign_keybind(chord, &mut km.clear_history, &mut replaced[2]);
            }
            other => {
                tracing::debug!(key = %other, "[Config] Ignoring unknown keybind");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    /// What: Configured chords replace defaults and accumulate across lines.
    ///
    /// Inputs:
    /// - Two `keybind_exit` lines, one `keybind_clear_history`, one invalid chord.
    ///
    /// Output:
    /// - Exit has exactly the two configured chords; help keeps its defaults.
    fn keybinds_replace_then_accumulate() {
        let content = "\
keybind_exit = Ctrl+Q
keybind_exit = F10
keybind_clear_history = Alt+H
keybind_help = Ctrl+
";
        let mut s = Settings::default();
        let default_help = s.keymap.help_overlay.clone();
        parse_keybinds(content, &mut s);
        assert_eq!(
            s.keymap.exit,
            vec![
                KeyChord {
                    code: KeyCode::Char('q'),
                    mods: KeyModifiers::CONTROL
                },
                KeyChord {
                    code: KeyCode::F(10),
                    mods: KeyModifiers::empty()
                },
            ]
        );
        assert_eq!(s.keymap.clear_history[0].label(), "Alt+H");
        assert_eq!(s.keymap.help_overlay, default_help);
    }
}
