use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::new_id;

/// A user goal with a free-form deadline. Completion is manual only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniGoal {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalSet {
    goals: Vec<MiniGoal>,
}

impl GoalSet {
    pub fn add(&mut self, text: &str, deadline: &str) -> Result<&MiniGoal, ValidationError> {
        let text = ValidationError::require_text("text", text)?;
        self.goals.push(MiniGoal {
            id: new_id(),
            text: text.to_string(),
            deadline: deadline.trim().to_string(),
            completed: false,
        });
        Ok(&self.goals[self.goals.len() - 1])
    }

    /// Flip `completed`; `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let goal = self.goals.iter_mut().find(|g| g.id == id)?;
        goal.completed = !goal.completed;
        Some(goal.completed)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }

    pub fn list(&self) -> &[MiniGoal] {
        &self.goals
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_toggle_remove() {
        let mut goals = GoalSet::default();
        let id = goals.add("Finish chapter 3", " Friday ").unwrap().id.clone();
        assert_eq!(goals.list()[0].deadline, "Friday");
        assert_eq!(goals.toggle(&id), Some(true));
        assert_eq!(goals.toggle(&id), Some(false));
        assert_eq!(goals.toggle("nope"), None);
        assert!(goals.remove(&id));
        assert!(!goals.remove(&id));
    }

    #[test]
    fn blank_goal_is_rejected() {
        let mut goals = GoalSet::default();
        assert!(goals.add(" ", "tomorrow").is_err());
        assert!(goals.is_empty());
    }
}
