//! Privacy and surveillance - safety bought with other people's data.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the privacy-surveillance category.
pub struct PrivacySurveillancePack;

impl ContentPack for PrivacySurveillancePack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "privacy-surveillance".to_string(),
            title: "Privacy & Surveillance".to_string(),
            description: "Cameras, sensors, and models promise safety and convenience. The cost is paid in watched lives, often by people who never opted in.".to_string(),
            icon: "eye".to_string(),
            difficulty: Difficulty::Intermediate,
            estimated_minutes: Some(30),
            scenarios: stubs(&scenarios),
            tags: vec![
                "privacy".to_string(),
                "surveillance".to_string(),
                "consent".to_string(),
            ],
            learning_objectives: vec![
                "Distinguish consent from acquiescence in data collection".to_string(),
                "Weigh collective safety claims against individual privacy".to_string(),
                "Recognize function creep in surveillance infrastructure".to_string(),
            ],
            philosophical_approaches: vec![
                "deontology".to_string(),
                "contractualism".to_string(),
            ],
            target_audiences: vec!["high-school".to_string(), "general".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "priv-doorbell-network".to_string(),
                category_id: "privacy-surveillance".to_string(),
                title: "The Doorbell Network".to_string(),
                description: "A street of smart doorbells becomes a police camera network nobody voted for.".to_string(),
                difficulty: Difficulty::Beginner,
                dilemma: "Half the houses on a street install video doorbells. The vendor offers police a portal to request footage directly from owners, and most comply. Neighbors without cameras are now recorded dozens of times a day on their own street. A burglary is solved within a week, and the neighborhood forum celebrates.".to_string(),
                ethical_question: "Does each household's individual choice add up to a legitimate surveillance system for those who never chose it?".to_string(),
                philosophical_approaches: vec![
                    "contractualism".to_string(),
                    "utilitarianism".to_string(),
                ],
                search_keywords: vec![
                    "doorbell".to_string(),
                    "neighborhood surveillance".to_string(),
                    "police access".to_string(),
                ],
                tags: vec!["privacy".to_string(), "policing".to_string()],
            },
            Scenario {
                id: "priv-exam-proctoring".to_string(),
                category_id: "privacy-surveillance".to_string(),
                title: "The Proctor in the Webcam".to_string(),
                description: "Remote exam software watches students' homes, faces, and eye movements.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A university requires AI proctoring for remote exams. The software records each student's room, flags gaze deviation, and escalates 'suspicious' behavior to staff. Students with tics, shared bedrooms, or darker skin tones are flagged disproportionately. Opting out means traveling to campus, which some students cannot afford. The university cites a measurable drop in cheating.".to_string(),
                ethical_question: "How much intrusion into private space can an institution demand as the price of participation?".to_string(),
                philosophical_approaches: vec![
                    "deontology".to_string(),
                    "justice-as-fairness".to_string(),
                ],
                search_keywords: vec![
                    "proctoring".to_string(),
                    "education".to_string(),
                    "gaze tracking".to_string(),
                ],
                tags: vec!["privacy".to_string(), "education".to_string()],
            },
            Scenario {
                id: "priv-retention-creep".to_string(),
                category_id: "privacy-surveillance".to_string(),
                title: "Kept Just in Case".to_string(),
                description: "Transit data collected for congestion planning is subpoenaed for something else entirely.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A city's transit authority keeps five years of tap-in records to model congestion. The data was collected under a policy promising 'planning purposes only'. A divorce lawyer subpoenas one rider's full movement history, and the authority's counsel advises there is no legal basis to refuse. Deleting the archive would end a research program that has genuinely improved service in underserved districts.".to_string(),
                ethical_question: "Is data ever truly collected for one purpose, and who guards the promise after the collector's incentives change?".to_string(),
                philosophical_approaches: vec![
                    "contractualism".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "data retention".to_string(),
                    "function creep".to_string(),
                    "transit".to_string(),
                ],
                tags: vec!["privacy".to_string(), "government".to_string()],
            },
        ]
    }

    fn lab_id(&self) -> Option<&'static str> {
        Some("privacy-surveillance-lab")
    }
}
