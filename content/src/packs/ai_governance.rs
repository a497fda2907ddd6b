//! AI governance - who gets to steer, inspect, and refuse.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the ai-governance category.
pub struct AiGovernancePack;

impl ContentPack for AiGovernancePack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "ai-governance".to_string(),
            title: "AI Governance".to_string(),
            description: "Between a handful of labs and everyone affected by their models sits an unsolved question: what oversight is owed, and to whom?".to_string(),
            icon: "gavel".to_string(),
            difficulty: Difficulty::Advanced,
            estimated_minutes: Some(40),
            scenarios: stubs(&scenarios),
            tags: vec![
                "governance".to_string(),
                "regulation".to_string(),
                "power".to_string(),
            ],
            learning_objectives: vec![
                "Compare self-regulation, state regulation, and international regimes".to_string(),
                "Evaluate openness of model weights as a governance instrument".to_string(),
                "Analyze legitimacy when the governed had no vote".to_string(),
            ],
            philosophical_approaches: vec![
                "contractualism".to_string(),
                "consequentialism".to_string(),
            ],
            target_audiences: vec!["undergraduate".to_string(), "professional".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "gov-audit-access".to_string(),
                category_id: "ai-governance".to_string(),
                title: "Auditors at the Gate".to_string(),
                description: "A regulator demands model access a lab insists would leak its crown jewels.".to_string(),
                difficulty: Difficulty::Advanced,
                dilemma: "A new statute empowers auditors to examine frontier models before deployment. The leading lab offers only a sandboxed query interface; auditors say meaningful evaluation requires weights, training data summaries, and internal red-team results. The lab answers that handing those over creates a leak surface its competitors and hostile states would exploit, harming the very public the audit protects.".to_string(),
                ethical_question: "How much transparency can the public demand of a private system whose risks are public?".to_string(),
                philosophical_approaches: vec![
                    "contractualism".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "audit".to_string(),
                    "transparency".to_string(),
                    "trade secrets".to_string(),
                ],
                tags: vec!["governance".to_string(), "transparency".to_string()],
            },
            Scenario {
                id: "gov-open-weights".to_string(),
                category_id: "ai-governance".to_string(),
                title: "The Unreleasable Release".to_string(),
                description: "A lab debates open-sourcing a model that others will inevitably misuse.".to_string(),
                difficulty: Difficulty::Advanced,
                dilemma: "A lab has built a capable model and must choose: release the weights, putting the tool in every researcher's hands and every abuser's, or keep it gated behind an API, concentrating power in one corporate rulebook. Safety filters on the open version will be stripped within weeks, and everyone knows it. Gating it means the lab's content policy quietly becomes law for millions of users who never elected it.".to_string(),
                ethical_question: "Which is the graver harm: capability without control, or control without accountability?".to_string(),
                philosophical_approaches: vec![
                    "consequentialism".to_string(),
                    "contractualism".to_string(),
                ],
                search_keywords: vec![
                    "open source".to_string(),
                    "model weights".to_string(),
                    "dual use".to_string(),
                ],
                tags: vec!["governance".to_string(), "power".to_string()],
            },
        ]
    }

    fn lab_id(&self) -> Option<&'static str> {
        Some("ai-governance-lab")
    }
}
