use super::{ContextCollector, FragmentListener, OrderedSet, Subscribers};
use crate::catalog::{Goal, MealType, SkillLevel};

/// Cook profile: skill, goal, meal type, equipment and a free-text requirement
#[derive(Debug, Default)]
pub struct ProfileSelector {
    skill: SkillLevel,
    goal: Goal,
    meal_type: MealType,
    equipment: OrderedSet,
    requirement: String,
    subscribers: Subscribers,
}

impl ProfileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn equipment(&self) -> &OrderedSet {
        &self.equipment
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn set_skill(&mut self, skill: SkillLevel) {
        if self.skill != skill {
            self.skill = skill;
            self.changed();
        }
    }

    pub fn set_goal(&mut self, goal: Goal) {
        if self.goal != goal {
            self.goal = goal;
            self.changed();
        }
    }

    pub fn set_meal_type(&mut self, meal_type: MealType) {
        if self.meal_type != meal_type {
            self.meal_type = meal_type;
            self.changed();
        }
    }

    /// Returns whether the equipment is now selected.
    pub fn toggle_equipment(&mut self, item: &str) -> bool {
        let selected = self.equipment.toggle(item);
        self.changed();
        selected
    }

    pub fn set_requirement(&mut self, requirement: impl Into<String>) {
        let requirement = requirement.into();
        if self.requirement != requirement {
            self.requirement = requirement;
            self.changed();
        }
    }

    /// Header line, e.g. "Beginner • High Protein • Dinner • Wok"
    pub fn summary(&self) -> String {
        let equipment = match self.equipment.len() {
            0 => String::new(),
            1 => format!(" • {}", self.equipment.join("")),
            n => format!(" • {} Equipments", n),
        };
        format!(
            "{} • {} • {}{}",
            self.skill.label(),
            self.goal.label(),
            self.meal_type.label(),
            equipment
        )
    }

    fn changed(&mut self) {
        let fragment = self.current_fragment();
        self.subscribers.notify(&fragment);
    }
}

impl ContextCollector for ProfileSelector {
    fn current_fragment(&self) -> String {
        let equipment = if self.equipment.is_empty() {
            "None".to_string()
        } else {
            self.equipment.join(", ")
        };

        format!(
            "- Cooking Skill: {}\n- Meal Type: {}\n- Dietary Goal: {}\n- Available Equipment: {}\n- Additional Requirement: {}",
            self.skill.label(),
            self.meal_type.label(),
            self.goal.label(),
            equipment,
            self.requirement
        )
        .trim_end()
        .to_string()
    }

    fn subscribe(&mut self, listener: FragmentListener) {
        let fragment = self.current_fragment();
        self.subscribers.add(listener, &fragment);
    }
}
