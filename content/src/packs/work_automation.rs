//! Work and automation - efficiency's bill, and who gets it.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the work-automation category.
pub struct WorkAutomationPack;

impl ContentPack for WorkAutomationPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "work-automation".to_string(),
            title: "Work & Automation".to_string(),
            description: "Software that schedules, paces, and replaces human labor redistributes more than tasks. It moves dignity, power, and risk.".to_string(),
            icon: "gears".to_string(),
            difficulty: Difficulty::Beginner,
            estimated_minutes: Some(25),
            scenarios: stubs(&scenarios),
            tags: vec![
                "labor".to_string(),
                "dignity".to_string(),
                "economics".to_string(),
            ],
            learning_objectives: vec![
                "Identify what workers lose beyond wages when tasks automate".to_string(),
                "Evaluate algorithmic management against older forms of supervision".to_string(),
                "Debate who owes transition support when work disappears".to_string(),
            ],
            philosophical_approaches: vec![
                "justice-as-fairness".to_string(),
                "virtue-ethics".to_string(),
            ],
            target_audiences: vec!["high-school".to_string(), "general".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "work-pace-algorithm".to_string(),
                category_id: "work-automation".to_string(),
                title: "The Rate".to_string(),
                description: "A warehouse pace-setting algorithm treats the workforce's best day as the new minimum.".to_string(),
                difficulty: Difficulty::Beginner,
                dilemma: "A fulfillment center's productivity system continuously recalculates the expected picks per hour from live worker data. Every record-setting shift ratchets the baseline upward, and three sub-baseline days triggers automatic termination proceedings. Injuries are up, but so is output, and pay is slightly above the regional average. Workers are told the target is simply what their own colleagues have proven possible.".to_string(),
                ethical_question: "Is a performance standard fair merely because humans have met it?".to_string(),
                philosophical_approaches: vec![
                    "virtue-ethics".to_string(),
                    "justice-as-fairness".to_string(),
                ],
                search_keywords: vec![
                    "warehouse".to_string(),
                    "algorithmic management".to_string(),
                    "quotas".to_string(),
                ],
                tags: vec!["labor".to_string(), "dignity".to_string()],
            },
            Scenario {
                id: "work-last-apprentice".to_string(),
                category_id: "work-automation".to_string(),
                title: "The Last Apprentice".to_string(),
                description: "Automating junior work removes the ladder the seniors climbed.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A law firm automates document review, the work its first-year associates learned the trade on. Partners keep their judgment, honed by years of the drudgery now delegated to software. The firm hires a third as many juniors, and no one can say where the next generation of seasoned reviewers is supposed to come from. Clients, meanwhile, pay less and get faster results.".to_string(),
                ethical_question: "Do professions owe their successors the inefficient work that once formed them?".to_string(),
                philosophical_approaches: vec![
                    "virtue-ethics".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "apprenticeship".to_string(),
                    "deskilling".to_string(),
                    "professions".to_string(),
                ],
                tags: vec!["labor".to_string(), "education".to_string()],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packs::pack_tests::check_pack;

    #[test]
    fn test_pack_is_consistent() {
        check_pack(&WorkAutomationPack);
    }
}
