use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: &'static str,
    /// Color identifier stored as the active theme.
    pub color: &'static str,
    pub unlock_points: u64,
}

/// Free theme active on first run.
pub const DEFAULT_THEME: Theme = Theme { name: "Indigo", color: "#6366f1", unlock_points: 0 };

pub const THEMES: &[Theme] = &[
    DEFAULT_THEME,
    Theme { name: "Ocean", color: "#0ea5e9", unlock_points: 50 },
    Theme { name: "Forest", color: "#22c55e", unlock_points: 150 },
    Theme { name: "Sunset", color: "#f97316", unlock_points: 300 },
    Theme { name: "Rose", color: "#f43f5e", unlock_points: 600 },
    Theme { name: "Gold", color: "#eab308", unlock_points: 1000 },
];

impl Theme {
    /// Look up by name (case-insensitive) or color.
    pub fn find(key: &str) -> Option<&'static Theme> {
        THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(key) || t.color.eq_ignore_ascii_case(key))
    }

    pub fn is_unlocked(&self, points: u64) -> bool {
        points >= self.unlock_points
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeStatus {
    pub theme: &'static Theme,
    pub unlocked: bool,
    pub active: bool,
}

pub fn evaluate_themes(points: u64, active_color: &str) -> Vec<ThemeStatus> {
    THEMES
        .iter()
        .map(|theme| ThemeStatus {
            theme,
            unlocked: theme.is_unlocked(points),
            active: theme.color.eq_ignore_ascii_case(active_color),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_free() {
        assert_eq!(DEFAULT_THEME.unlock_points, 0);
        assert!(DEFAULT_THEME.is_unlocked(0));
    }

    #[test]
    fn unlock_at_exact_points() {
        let ocean = Theme::find("ocean").unwrap();
        assert!(!ocean.is_unlocked(49));
        assert!(ocean.is_unlocked(50));
    }

    #[test]
    fn find_by_color() {
        assert_eq!(Theme::find("#22C55E").map(|t| t.name), Some("Forest"));
        assert!(Theme::find("plaid").is_none());
    }

    #[test]
    fn evaluate_marks_active_and_unlocked() {
        let statuses = evaluate_themes(160, "#0ea5e9");
        let unlocked: Vec<_> = statuses.iter().filter(|s| s.unlocked).map(|s| s.theme.name).collect();
        assert_eq!(unlocked, vec!["Indigo", "Ocean", "Forest"]);
        assert_eq!(statuses.iter().filter(|s| s.active).count(), 1);
        assert!(statuses[1].active);
        assert_eq!(statuses, evaluate_themes(160, "#0ea5e9"));
    }
}
