//! Misinformation and synthetic media - when seeing stops being believing.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the misinformation category.
pub struct MisinformationPack;

impl ContentPack for MisinformationPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "misinformation".to_string(),
            title: "Misinformation & Deepfakes".to_string(),
            description: "Generative models make fabricated audio and video cheap. The damage is not only what people believe, but what they can no longer be sure of.".to_string(),
            icon: "masks".to_string(),
            difficulty: Difficulty::Intermediate,
            estimated_minutes: Some(30),
            scenarios: stubs(&scenarios),
            tags: vec![
                "media".to_string(),
                "truth".to_string(),
                "trust".to_string(),
            ],
            learning_objectives: vec![
                "Distinguish deception, satire, and consented fabrication".to_string(),
                "Evaluate the liar's dividend created by plausible fakery".to_string(),
                "Weigh platform moderation against expression rights".to_string(),
            ],
            philosophical_approaches: vec![
                "consequentialism".to_string(),
                "virtue-ethics".to_string(),
            ],
            target_audiences: vec!["high-school".to_string(), "general".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "misinfo-deepfake-evidence".to_string(),
                category_id: "misinformation".to_string(),
                title: "It Could Be Fake".to_string(),
                description: "A genuine recording of misconduct is dismissed because fakes exist.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A whistleblower releases authentic audio of an official soliciting a bribe. The official declares it a deepfake, and forensic experts can say only that no signs of synthesis were detected. Polls show most voters now treat all leaked recordings as unverifiable noise. The technology that made fakes possible has devalued the real evidence too.".to_string(),
                ethical_question: "Who bears responsibility for the erosion of evidence itself, and what would restoring trust even look like?".to_string(),
                philosophical_approaches: vec![
                    "consequentialism".to_string(),
                    "virtue-ethics".to_string(),
                ],
                search_keywords: vec![
                    "deepfake".to_string(),
                    "liar's dividend".to_string(),
                    "evidence".to_string(),
                ],
                tags: vec!["media".to_string(), "politics".to_string()],
            },
            Scenario {
                id: "misinfo-resurrection-ad".to_string(),
                category_id: "misinformation".to_string(),
                title: "The Candidate Who Wasn't There".to_string(),
                description: "A campaign runs a flattering synthetic video of its own candidate, disclosed in fine print.".to_string(),
                difficulty: Difficulty::Beginner,
                dilemma: "A campaign releases a video of its candidate delivering a speech she never gave, in a stadium she never visited, to applause that never happened. A caption on the final frame discloses the synthesis. The campaign argues it is no different from a scripted ad with actors; critics answer that the format is engineered to be remembered as a real event.".to_string(),
                ethical_question: "Does disclosure cure a fabrication designed to outlive the disclosure in memory?".to_string(),
                philosophical_approaches: vec![
                    "deontology".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "synthetic media".to_string(),
                    "political advertising".to_string(),
                    "disclosure".to_string(),
                ],
                tags: vec!["media".to_string(), "politics".to_string(), "consent".to_string()],
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
        check_pack(&MisinformationPack);
    }
}
