use serde::Serialize;

use super::Stats;

/// Threshold predicate over [`Stats`].
///
/// Streak badges look at the best streak ever reached, so a lapse does not
/// hide a badge the user has already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "threshold", rename_all = "snake_case")]
pub enum BadgeRule {
    Points(u64),
    BestStreak(u32),
    HabitsCompleted(u64),
    TimerSessions(u64),
    GoalsCreated(u64),
    IfThenCreated(u64),
}

impl BadgeRule {
    pub fn is_met(&self, stats: &Stats) -> bool {
        match *self {
            BadgeRule::Points(n) => stats.points >= n,
            BadgeRule::BestStreak(n) => stats.best_streak.max(stats.streak) >= n,
            BadgeRule::HabitsCompleted(n) => stats.analytics.habits_completed >= n,
            BadgeRule::TimerSessions(n) => stats.analytics.timer_sessions >= n,
            BadgeRule::GoalsCreated(n) => stats.analytics.goals_created >= n,
            BadgeRule::IfThenCreated(n) => stats.analytics.if_then_created >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rule: BadgeRule,
}

pub const BADGES: &[Badge] = &[
    Badge {
        id: "first-steps",
        name: "First Steps",
        description: "Earn your first 10 points",
        rule: BadgeRule::Points(10),
    },
    Badge {
        id: "on-fire",
        name: "On Fire",
        description: "Log activity 3 days in a row",
        rule: BadgeRule::BestStreak(3),
    },
    Badge {
        id: "week-warrior",
        name: "Week Warrior",
        description: "Log activity 7 days in a row",
        rule: BadgeRule::BestStreak(7),
    },
    Badge {
        id: "habit-builder",
        name: "Habit Builder",
        description: "Complete 10 habits",
        rule: BadgeRule::HabitsCompleted(10),
    },
    Badge {
        id: "deep-focus",
        name: "Deep Focus",
        description: "Finish 5 focus sessions",
        rule: BadgeRule::TimerSessions(5),
    },
    Badge {
        id: "goal-setter",
        name: "Goal Setter",
        description: "Create 3 mini-goals",
        rule: BadgeRule::GoalsCreated(3),
    },
    Badge {
        id: "strategist",
        name: "Strategist",
        description: "Create 3 if-then plans",
        rule: BadgeRule::IfThenCreated(3),
    },
    Badge {
        id: "centurion",
        name: "Centurion",
        description: "Reach 500 points",
        rule: BadgeRule::Points(500),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStatus {
    pub badge: &'static Badge,
    pub unlocked: bool,
}

/// Every badge in catalog order with its current unlock state.
pub fn evaluate_badges(stats: &Stats) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            badge,
            unlocked: badge.rule.is_met(stats),
        })
        .collect()
}
