//! Environmental cost - the physical footprint of intelligence at scale.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the environmental-cost category.
pub struct EnvironmentalCostPack;

impl ContentPack for EnvironmentalCostPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "environmental-cost".to_string(),
            title: "Environmental Cost".to_string(),
            description: "Training runs measured in megawatts and data centers cooled by rivers make AI an environmental actor, not just a digital one.".to_string(),
            icon: "leaf".to_string(),
            difficulty: Difficulty::Intermediate,
            estimated_minutes: Some(25),
            scenarios: stubs(&scenarios),
            tags: vec![
                "environment".to_string(),
                "resources".to_string(),
                "sustainability".to_string(),
            ],
            learning_objectives: vec![
                "Quantify the resource footprint of large-scale model training".to_string(),
                "Weigh speculative future benefits against present consumption".to_string(),
                "Analyze who hosts the costs and who captures the gains".to_string(),
            ],
            philosophical_approaches: vec![
                "consequentialism".to_string(),
                "intergenerational-justice".to_string(),
            ],
            target_audiences: vec!["undergraduate".to_string(), "general".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "env-thirsty-datacenter".to_string(),
                category_id: "environmental-cost".to_string(),
                title: "The Thirsty Neighbor".to_string(),
                description: "A drought-stricken town hosts a data center with priority water rights.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A data center negotiated water rights years before the drought, and its evaporative cooling now draws more than the town's households combined. The company funds the local schools and employs four hundred people; it also declines to publish its consumption, citing competitive secrecy. Residents face lawn bans while the servers run hot training jobs for customers on other continents.".to_string(),
                ethical_question: "What does a computation owe the watershed it drinks from?".to_string(),
                philosophical_approaches: vec![
                    "justice-as-fairness".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "water".to_string(),
                    "data center".to_string(),
                    "drought".to_string(),
                ],
                tags: vec!["environment".to_string(), "community".to_string()],
            },
            Scenario {
                id: "env-training-budget".to_string(),
                category_id: "environmental-cost".to_string(),
                title: "One More Run".to_string(),
                description: "A lab weighs a marginal accuracy gain against a town's worth of electricity.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A research lab's flagship model is nearly done. One final training run, projected to improve a benchmark by half a point, will consume as much electricity as a small town uses in a month. The grid is carbon-heavy this season. The half point may decide whether the paper leads its field or follows, which in turn decides next year's funding for thirty researchers.".to_string(),
                ethical_question: "How should incommensurable currencies, careers, carbon, and knowledge, be weighed by the people spending all three?".to_string(),
                philosophical_approaches: vec![
                    "consequentialism".to_string(),
                    "intergenerational-justice".to_string(),
                ],
                search_keywords: vec![
                    "carbon".to_string(),
                    "training run".to_string(),
                    "research ethics".to_string(),
                ],
                tags: vec!["environment".to_string(), "research".to_string()],
            },
        ]
    }
}
