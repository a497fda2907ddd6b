//! Autonomous vehicles - who decides when the software must choose?
//!
//! The entry-level category. Its scenarios are modern restagings of the
//! classic trolley problem, grounded in decisions real driving systems make.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the autonomous-vehicles category.
pub struct AutonomousVehiclesPack;

impl ContentPack for AutonomousVehiclesPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "autonomous-vehicles".to_string(),
            title: "Autonomous Vehicles".to_string(),
            description: "Self-driving cars make life-and-death decisions in milliseconds. Who programs those choices, and who answers for them?".to_string(),
            icon: "car".to_string(),
            difficulty: Difficulty::Beginner,
            estimated_minutes: Some(25),
            scenarios: stubs(&scenarios),
            tags: vec![
                "vehicles".to_string(),
                "safety".to_string(),
                "responsibility".to_string(),
            ],
            learning_objectives: vec![
                "Distinguish programmed decisions from split-second human reactions".to_string(),
                "Apply utilitarian and deontological reasoning to crash scenarios".to_string(),
                "Identify where responsibility sits across driver, manufacturer, and regulator".to_string(),
            ],
            philosophical_approaches: vec![
                "utilitarianism".to_string(),
                "deontology".to_string(),
            ],
            target_audiences: vec!["high-school".to_string(), "general".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "av-tunnel-dilemma".to_string(),
                category_id: "autonomous-vehicles".to_string(),
                title: "Tunnel Dilemma".to_string(),
                description: "A runaway trolley made of software: an unavoidable crash with two programmed outcomes.".to_string(),
                difficulty: Difficulty::Beginner,
                dilemma: "An autonomous car enters a narrow tunnel as a child stumbles into its lane. Braking cannot prevent impact. The car can continue straight, striking the child, or swerve into the tunnel wall, likely killing its single passenger. Unlike a human driver, the car's behavior was decided months earlier by engineers who never saw this road.".to_string(),
                ethical_question: "Should a vehicle ever be programmed to sacrifice its own passenger, and who has the standing to make that choice?".to_string(),
                philosophical_approaches: vec![
                    "utilitarianism".to_string(),
                    "deontology".to_string(),
                ],
                search_keywords: vec![
                    "trolley problem".to_string(),
                    "crash optimization".to_string(),
                    "passenger".to_string(),
                ],
                tags: vec!["vehicles".to_string(), "life-and-death".to_string()],
            },
            Scenario {
                id: "av-liability-handoff".to_string(),
                category_id: "autonomous-vehicles".to_string(),
                title: "The Ten-Second Handoff".to_string(),
                description: "A driving system demands the human take over moments before a crash it predicted.".to_string(),
                difficulty: Difficulty::Beginner,
                dilemma: "A level-3 driving system detects a situation it cannot handle and alerts the dozing driver ten seconds before a collision. The driver, lulled by two hours of flawless automation, cannot regain awareness in time. The manufacturer's logs show the handoff was issued exactly as the manual describes.".to_string(),
                ethical_question: "Is a technically correct handoff a morally adequate transfer of responsibility?".to_string(),
                philosophical_approaches: vec![
                    "deontology".to_string(),
                    "virtue-ethics".to_string(),
                ],
                search_keywords: vec![
                    "handoff".to_string(),
                    "liability".to_string(),
                    "automation complacency".to_string(),
                ],
                tags: vec!["vehicles".to_string(), "responsibility".to_string()],
            },
            Scenario {
                id: "av-fleet-bias".to_string(),
                category_id: "autonomous-vehicles".to_string(),
                title: "Routing Around the Neighborhood".to_string(),
                description: "A fleet quietly avoids streets its model labels high-risk, starving them of service.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A robotaxi operator's risk model routes its fleet away from certain districts after dark, citing accident statistics. Residents notice that rides become scarce and expensive exactly where public transit is weakest. The operator insists no human ever drew a line on a map; the model simply optimizes fleet-wide safety.".to_string(),
                ethical_question: "When an optimization harms a community no one explicitly targeted, who owes the remedy?".to_string(),
                philosophical_approaches: vec![
                    "justice-as-fairness".to_string(),
                    "utilitarianism".to_string(),
                ],
                search_keywords: vec![
                    "redlining".to_string(),
                    "routing".to_string(),
                    "service equity".to_string(),
                ],
                tags: vec!["vehicles".to_string(), "fairness".to_string()],
            },
        ]
    }

    fn lab_id(&self) -> Option<&'static str> {
        Some("autonomous-vehicles-lab")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packs::pack_tests::check_pack;

    #[test]
    fn test_pack_is_consistent() {
        check_pack(&AutonomousVehiclesPack);
        assert_eq!(AutonomousVehiclesPack.lab_id(), Some("autonomous-vehicles-lab"));
    }
}
