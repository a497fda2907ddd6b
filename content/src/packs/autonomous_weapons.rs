//! Autonomous weapons - delegating force to machines.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the autonomous-weapons category.
pub struct AutonomousWeaponsPack;

impl ContentPack for AutonomousWeaponsPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "autonomous-weapons".to_string(),
            title: "Autonomous Weapons".to_string(),
            description: "Weapon systems that select and engage targets without a human pulling the trigger force the oldest questions of just war into new territory.".to_string(),
            icon: "shield".to_string(),
            difficulty: Difficulty::Advanced,
            estimated_minutes: Some(35),
            scenarios: stubs(&scenarios),
            tags: vec![
                "warfare".to_string(),
                "autonomy".to_string(),
                "accountability".to_string(),
            ],
            learning_objectives: vec![
                "Apply just-war criteria of distinction and proportionality to machine decisions".to_string(),
                "Examine what meaningful human control requires in practice".to_string(),
                "Trace accountability when no individual chose the target".to_string(),
            ],
            philosophical_approaches: vec![
                "just-war-theory".to_string(),
                "deontology".to_string(),
            ],
            target_audiences: vec!["undergraduate".to_string(), "professional".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "weap-loitering-munition".to_string(),
                category_id: "autonomous-weapons".to_string(),
                title: "Sixty Seconds of Autonomy".to_string(),
                description: "A munition loses its link and must decide alone whether the target below still qualifies.".to_string(),
                difficulty: Difficulty::Advanced,
                dilemma: "A loitering munition is authorized against an air-defense radar. Jamming severs its control link during the final minute. Its onboard classifier still matches the target signature, but the confidence score has dropped and a vehicle convoy has stopped nearby since authorization. Designers must decide now, at the drawing board, what the weapon does then: abort by default, or complete the strike it was legitimately assigned.".to_string(),
                ethical_question: "Can authorization given to a machine in advance remain valid once circumstances the authorizer never saw have changed?".to_string(),
                philosophical_approaches: vec![
                    "just-war-theory".to_string(),
                    "deontology".to_string(),
                ],
                search_keywords: vec![
                    "loitering munition".to_string(),
                    "meaningful human control".to_string(),
                    "target verification".to_string(),
                ],
                tags: vec!["warfare".to_string(), "life-and-death".to_string()],
            },
            Scenario {
                id: "weap-accountability-gap".to_string(),
                category_id: "autonomous-weapons".to_string(),
                title: "The Empty Chair at the Tribunal".to_string(),
                description: "A strike killed civilians; every human in the chain followed procedure.".to_string(),
                difficulty: Difficulty::Advanced,
                dilemma: "An autonomous system misclassifies a wedding convoy as a military column. The commander deployed it within doctrine, the operators monitored as trained, the engineers met every specification, and the vendor's test regime exceeded requirements. An inquiry finds no negligence anywhere, yet thirty civilians are dead. Victims' families are told, accurately, that no one is to blame.".to_string(),
                ethical_question: "If responsibility genuinely dissolves across a system, was the decision to field it the real culpable act?".to_string(),
                philosophical_approaches: vec![
                    "deontology".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "accountability gap".to_string(),
                    "war crimes".to_string(),
                    "command responsibility".to_string(),
                ],
                tags: vec!["warfare".to_string(), "accountability".to_string()],
            },
        ]
    }
}
