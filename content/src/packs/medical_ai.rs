//! Medical AI - care decisions shared with a model.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the medical-ai category.
pub struct MedicalAiPack;

impl ContentPack for MedicalAiPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "medical-ai".to_string(),
            title: "Medical AI".to_string(),
            description: "Diagnostic and triage models can outperform clinicians on averages while failing individuals in ways no one predicted.".to_string(),
            icon: "stethoscope".to_string(),
            difficulty: Difficulty::Advanced,
            estimated_minutes: Some(40),
            scenarios: stubs(&scenarios),
            tags: vec![
                "medicine".to_string(),
                "care".to_string(),
                "autonomy".to_string(),
            ],
            learning_objectives: vec![
                "Apply the principles of biomedical ethics to machine recommendations".to_string(),
                "Analyze how deference to a model reshapes clinical responsibility".to_string(),
                "Assess informed consent when patients face algorithmic decisions".to_string(),
            ],
            philosophical_approaches: vec![
                "principlism".to_string(),
                "care-ethics".to_string(),
                "utilitarianism".to_string(),
            ],
            target_audiences: vec!["professional".to_string(), "undergraduate".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "med-triage-allocation".to_string(),
                category_id: "medical-ai".to_string(),
                title: "The Triage Queue".to_string(),
                description: "An ICU allocation model optimizes survival statistics during a surge.".to_string(),
                difficulty: Difficulty::Advanced,
                dilemma: "During a respiratory surge, a hospital deploys a model that ranks ICU candidates by predicted survival benefit. It consistently ranks elderly patients and patients with disabilities lower, exactly as its objective dictates. Clinicians can override it, but every override is logged and reviewed, and the unit is saving measurably more lives than its sister hospital across town.".to_string(),
                ethical_question: "May a hospital maximize lives saved through a ranking the patients at the bottom never agreed to?".to_string(),
                philosophical_approaches: vec![
                    "utilitarianism".to_string(),
                    "principlism".to_string(),
                ],
                search_keywords: vec![
                    "triage".to_string(),
                    "icu".to_string(),
                    "allocation".to_string(),
                ],
                tags: vec!["medicine".to_string(), "life-and-death".to_string()],
            },
            Scenario {
                id: "med-diagnostic-override".to_string(),
                category_id: "medical-ai".to_string(),
                title: "Overruling the Radiologist".to_string(),
                description: "A clinician disagrees with a model whose track record is better than hers.".to_string(),
                difficulty: Difficulty::Advanced,
                dilemma: "A radiologist reads a scan as benign. The assisting model flags it malignant with high confidence, and hospital data shows the model's accuracy exceeds the department's average. Following her judgment risks missing a cancer; deferring trains everyone to stop looking. The hospital's policy manual is silent, and the patient is waiting outside.".to_string(),
                ethical_question: "What does due care mean when the standard of care is becoming the machine?".to_string(),
                philosophical_approaches: vec![
                    "virtue-ethics".to_string(),
                    "principlism".to_string(),
                ],
                search_keywords: vec![
                    "radiology".to_string(),
                    "override".to_string(),
                    "deskilling".to_string(),
                ],
                tags: vec!["medicine".to_string(), "responsibility".to_string()],
            },
            Scenario {
                id: "med-silent-model".to_string(),
                category_id: "medical-ai".to_string(),
                title: "The Unmentioned Second Opinion".to_string(),
                description: "Patients are never told a model helped decide their treatment.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A clinic uses a model to recommend between two equally approved therapies. Consent forms mention neither the model nor the vendor's financial ties to one manufacturer. Administrators argue the model is just decision support, no different from a textbook, and that explaining it would only confuse patients and erode trust in their physicians.".to_string(),
                ethical_question: "Does informed consent require disclosing the algorithm, or only the options it chose between?".to_string(),
                philosophical_approaches: vec![
                    "principlism".to_string(),
                    "deontology".to_string(),
                ],
                search_keywords: vec![
                    "informed consent".to_string(),
                    "disclosure".to_string(),
                    "decision support".to_string(),
                ],
                tags: vec!["medicine".to_string(), "transparency".to_string(), "consent".to_string()],
            },
        ]
    }

    fn lab_id(&self) -> Option<&'static str> {
        Some("medical-ai-lab")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packs::pack_tests::check_pack;

    #[test]
    fn test_pack_is_consistent() {
        check_pack(&MedicalAiPack);
    }
}
