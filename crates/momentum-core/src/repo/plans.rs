use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::new_id;

/// A standing implementation intention: when `trigger`, do `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfThenPlan {
    pub id: String,
    pub trigger: String,
    pub action: String,
}

/// A ready-made if-then pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IfThenPreset {
    pub id: &'static str,
    pub trigger: &'static str,
    pub action: &'static str,
}

pub const IF_THEN_PRESETS: &[IfThenPreset] = &[
    IfThenPreset {
        id: "phone-reach",
        trigger: "I reach for my phone while working",
        action: "take three slow breaths and return to the task",
    },
    IfThenPreset {
        id: "afternoon-slump",
        trigger: "I feel the afternoon slump",
        action: "walk for five minutes before deciding what is next",
    },
    IfThenPreset {
        id: "morning-coffee",
        trigger: "I pour my morning coffee",
        action: "write down the one thing that matters today",
    },
    IfThenPreset {
        id: "overwhelmed",
        trigger: "I feel overwhelmed",
        action: "pick the smallest next step and do only that",
    },
    IfThenPreset {
        id: "end-of-day",
        trigger: "I close my laptop for the day",
        action: "log one win from today",
    },
];

impl IfThenPreset {
    pub fn find(id: &str) -> Option<&'static IfThenPreset> {
        IF_THEN_PRESETS.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanSet {
    plans: Vec<IfThenPlan>,
}

impl PlanSet {
    pub fn add(&mut self, trigger: &str, action: &str) -> Result<&IfThenPlan, ValidationError> {
        let trigger = ValidationError::require_text("trigger", trigger)?;
        let action = ValidationError::require_text("action", action)?;
        self.plans.push(IfThenPlan {
            id: new_id(),
            trigger: trigger.to_string(),
            action: action.to_string(),
        });
        Ok(&self.plans[self.plans.len() - 1])
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.plans.len();
        self.plans.retain(|p| p.id != id);
        self.plans.len() != before
    }

    pub fn list(&self) -> &[IfThenPlan] {
        &self.plans
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Wish, Outcome, Obstacle, Plan. A singleton overwritten in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoopPlan {
    #[serde(default)]
    pub wish: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub obstacle: String,
    #[serde(default)]
    pub plan: String,
}

impl WoopPlan {
    pub fn is_empty(&self) -> bool {
        [&self.wish, &self.outcome, &self.obstacle, &self.plan]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}
