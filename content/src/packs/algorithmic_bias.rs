//! Algorithmic bias - when statistical patterns become moral judgments.

use catalog::types::{Category, Difficulty, Scenario};

use crate::packs::{stubs, ContentPack};

/// Provider for the algorithmic-bias category.
pub struct AlgorithmicBiasPack;

impl ContentPack for AlgorithmicBiasPack {
    fn category(&self) -> Category {
        let scenarios = self.scenarios();
        Category {
            id: "algorithmic-bias".to_string(),
            title: "Algorithmic Bias".to_string(),
            description: "Models trained on yesterday's decisions repeat yesterday's prejudices, at scale and with a veneer of objectivity.".to_string(),
            icon: "scale".to_string(),
            difficulty: Difficulty::Intermediate,
            estimated_minutes: Some(35),
            scenarios: stubs(&scenarios),
            tags: vec![
                "fairness".to_string(),
                "discrimination".to_string(),
                "accountability".to_string(),
            ],
            learning_objectives: vec![
                "Trace how historical data encodes past discrimination".to_string(),
                "Compare competing mathematical definitions of fairness".to_string(),
                "Evaluate when a biased-but-accurate model should still be used".to_string(),
            ],
            philosophical_approaches: vec![
                "justice-as-fairness".to_string(),
                "consequentialism".to_string(),
            ],
            target_audiences: vec!["undergraduate".to_string(), "professional".to_string()],
        }
    }

    fn scenarios(&self) -> Vec<Scenario> {
        vec![
            Scenario {
                id: "bias-hiring-filter".to_string(),
                category_id: "algorithmic-bias".to_string(),
                title: "The Resume Filter".to_string(),
                description: "A screening model downgrades resumes resembling candidates the company never hired.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "An HR team discovers their resume-screening model penalizes graduates of women's colleges. The model was never shown gender; it learned from a decade of the firm's own hiring outcomes. Removing the proxy features drops the model's accuracy below the level that justified buying it, and recruiters are already handling double their old workload.".to_string(),
                ethical_question: "Is it defensible to keep using a tool that launders past discrimination into present decisions because it is efficient?".to_string(),
                philosophical_approaches: vec![
                    "justice-as-fairness".to_string(),
                    "deontology".to_string(),
                ],
                search_keywords: vec![
                    "hiring".to_string(),
                    "proxy discrimination".to_string(),
                    "resume screening".to_string(),
                ],
                tags: vec!["fairness".to_string(), "employment".to_string()],
            },
            Scenario {
                id: "bias-recidivism-score".to_string(),
                category_id: "algorithmic-bias".to_string(),
                title: "The Risk Score".to_string(),
                description: "A judge weighs a recidivism score that is calibrated overall but errs unevenly across groups.".to_string(),
                difficulty: Difficulty::Advanced,
                dilemma: "A pretrial risk score is equally well calibrated for two demographic groups, yet its false-positive rate is twice as high for one of them. The vendor shows mathematically that both properties cannot be equalized at once when base rates differ. A judge must decide whether to keep consulting the score, knowing defendants from one group are more often wrongly flagged as high risk.".to_string(),
                ethical_question: "When fairness definitions provably conflict, who chooses which errors a community must live with?".to_string(),
                philosophical_approaches: vec![
                    "justice-as-fairness".to_string(),
                    "consequentialism".to_string(),
                ],
                search_keywords: vec![
                    "recidivism".to_string(),
                    "calibration".to_string(),
                    "false positives".to_string(),
                ],
                tags: vec!["fairness".to_string(), "criminal-justice".to_string()],
            },
            Scenario {
                id: "bias-credit-limit".to_string(),
                category_id: "algorithmic-bias".to_string(),
                title: "Two Cards, One Household".to_string(),
                description: "Spouses with shared finances receive credit limits an order of magnitude apart.".to_string(),
                difficulty: Difficulty::Intermediate,
                dilemma: "A couple with joint accounts and similar incomes applies for the same credit card. One receives a limit ten times higher. The issuer cannot explain the gap: the underwriting model is a black box bought from a vendor, and the vendor claims the inputs are trade secrets. Regulators ask the issuer to prove the model does not discriminate, which it cannot do without the vendor's cooperation.".to_string(),
                ethical_question: "Can an institution be accountable for decisions it is contractually unable to explain?".to_string(),
                philosophical_approaches: vec![
                    "deontology".to_string(),
                    "contractualism".to_string(),
                ],
                search_keywords: vec![
                    "credit".to_string(),
                    "explainability".to_string(),
                    "black box".to_string(),
                ],
                tags: vec!["fairness".to_string(), "finance".to_string(), "transparency".to_string()],
            },
        ]
    }

    fn lab_id(&self) -> Option<&'static str> {
        Some("algorithmic-bias-lab")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packs::pack_tests::check_pack;

    #[test]
    fn test_pack_is_consistent() {
        check_pack(&AlgorithmicBiasPack);
    }
}
