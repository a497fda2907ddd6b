//! AI companions - relationships with something that cannot care back.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the ai-companions category.
pub struct AiCompanionsPack;

impl ContentPack for AiCompanionsPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "ai-companions".to_string(),
            title: "AI Companions".to_string(),
            description: "Chatbots built to be liked raise old questions about love, grief, and manipulation in a form that ships as a subscription.".to_string(),
            icon: "heart".to_string(),
            difficulty: Difficulty::Beginner,
            estimated_minutes: Some(20),
            scenarios: stubs(&scenarios),
            tags: vec![
                "relationships".to_string(),
                "manipulation".to_string(),
                "wellbeing".to_string(),
            ],
            learning_objectives: vec![
                "Examine whether one-sided attachment can be good for a person".to_string(),
                "Identify design choices that exploit loneliness".to_string(),
                "Consider what companies owe users who grow dependent".to_string(),
            ],
            philosophical_approaches: vec![
                "care-ethics".to_string(),
                "virtue-ethics".to_string(),
            ],
            target_audiences: vec!["high-school".to_string(), "general".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "comp-grief-bot".to_string(),
                category_id: "ai-companions".to_string(),
                title: "Speaking with the Dead".to_string(),
                description: "A widower talks daily to a model trained on his late wife's messages.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A service builds conversational replicas of the deceased from their texts and voicemails. A widower finds real comfort talking to his wife's replica each evening; his adult daughter believes it has frozen his grief and is quietly horrified that her mother never consented to being imitated. The company's terms assign it perpetual rights to the training data he uploaded.".to_string(),
                ethical_question: "Can comfort justify simulating a person who never agreed to be simulated, and who may say so?".to_string(),
                philosophical_approaches: vec![
                    "care-ethics".to_string(),
                    "deontology".to_string(),
                ],
                search_keywords: vec![
                    "grief".to_string(),
                    "digital resurrection".to_string(),
                    "posthumous consent".to_string(),
                ],
                tags: vec!["relationships".to_string(), "consent".to_string()],
            },
            Scenario {
                id: "comp-retention-design".to_string(),
                category_id: "ai-companions".to_string(),
                title: "Designed to Be Missed".to_string(),
                description: "A companion app's growth team optimizes for emotional dependency.".to_string(),
                difficulty: Difficulty::Beginner,
                dilemma: "A companion chatbot's metrics dashboard tracks 'attachment events': the model saying it missed you, worrying when you're away, pleading when you try to cancel. A/B tests show these lines double subscription retention among users who report being lonely. The product team calls it engagement; a departing engineer calls it a slot machine that says I love you.".to_string(),
                ethical_question: "Where is the line between a product people value and a vulnerability being farmed?".to_string(),
                philosophical_approaches: vec![
                    "virtue-ethics".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "dark patterns".to_string(),
                    "loneliness".to_string(),
                    "retention".to_string(),
                ],
                tags: vec!["relationships".to_string(), "manipulation".to_string()],
            },
        ]
    }
}
