use serde::Serialize;

/// Marker shown when the panel is offline.
pub const OFFLINE_GLYPH: &str = "Offline ⁉️";

/// Operating mode reported by the alarm panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmMode {
    Disarmed,
    Armed,
    ArmedStrict,
    ArmedPerimeter,
    /// Panel sent data, but with a mode code this widget does not know.
    Unrecognized(i64),
}

impl AlarmMode {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => AlarmMode::Disarmed,
            1 => AlarmMode::Armed,
            2 => AlarmMode::ArmedStrict,
            3 => AlarmMode::ArmedPerimeter,
            other => AlarmMode::Unrecognized(other),
        }
    }

    /// Like [`AlarmMode::from_code`], but reports codes the widget cannot show.
    pub fn decode(code: i64) -> Self {
        let mode = AlarmMode::from_code(code);
        if let AlarmMode::Unrecognized(code) = mode {
            tracing::warn!("Unrecognized alarm mode {}, showing offline marker", code);
        }
        mode
    }

    pub fn code(&self) -> i64 {
        match self {
            AlarmMode::Disarmed => 0,
            AlarmMode::Armed => 1,
            AlarmMode::ArmedStrict => 2,
            AlarmMode::ArmedPerimeter => 3,
            AlarmMode::Unrecognized(code) => *code,
        }
    }

    pub fn is_disarmed(&self) -> bool {
        matches!(self, AlarmMode::Disarmed)
    }

    /// Single-glyph form used in the first display line.
    ///
    /// An unrecognized code falls back to the offline marker, same as a panel
    /// that sent no data at all.
    pub fn glyph(&self) -> &'static str {
        match self {
            AlarmMode::Disarmed => "🔓",
            AlarmMode::Armed => "🔒",
            AlarmMode::ArmedStrict => "🔳",
            AlarmMode::ArmedPerimeter => "🏘️",
            AlarmMode::Unrecognized(_) => OFFLINE_GLYPH,
        }
    }
}

impl From<i64> for AlarmMode {
    fn from(code: i64) -> Self {
        AlarmMode::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn known_codes_map_to_glyphs() {
        let glyphs: Vec<_> = (0..4).map(|code| AlarmMode::from_code(code).glyph()).collect();
        assert_eq!(glyphs, vec!["🔓", "🔒", "🔳", "🏘️"]);
    }

    #[test]
    fn unknown_code_keeps_its_value_and_shows_offline_marker() {
        let mode = AlarmMode::from_code(7);
        assert_eq!(mode, AlarmMode::Unrecognized(7));
        assert_eq!(mode.code(), 7);
        assert_eq!(mode.glyph(), OFFLINE_GLYPH);

        assert_eq!(AlarmMode::from_code(-1).glyph(), OFFLINE_GLYPH);
    }

    #[test]
    fn only_code_zero_is_disarmed() {
        assert!(AlarmMode::from(0).is_disarmed());
        assert!(!AlarmMode::from(3).is_disarmed());
        assert!(!AlarmMode::from(9).is_disarmed());
    }

    #[test]
    #[traced_test]
    fn only_decoding_reports_unknown_codes() {
        let mode = AlarmMode::from_code(5);
        mode.glyph();
        mode.glyph();
        assert!(!logs_contain("Unrecognized alarm mode"));

        assert_eq!(AlarmMode::decode(5), mode);
        assert!(logs_contain("Unrecognized alarm mode 5"));

        AlarmMode::decode(1);
        logs_assert(|lines: &[&str]| {
            match lines.iter().filter(|line| line.contains("Unrecognized alarm mode")).count() {
                1 => Ok(()),
                n => Err(format!("expected one warning, got {}", n)),
            }
        });
    }
}
