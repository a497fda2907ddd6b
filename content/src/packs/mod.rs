//! Built-in content packs.
//!
//! Each module provides one category of the application's catalog: the
//! category record, its full scenario records, and the id of its learning
//! lab when one exists. Content here is authored, not generated; packs are
//! the Rust counterpart of the original per-category content modules.

pub mod ai_companions;
pub mod ai_governance;
pub mod algorithmic_bias;
pub mod autonomous_vehicles;
pub mod autonomous_weapons;
pub mod environmental_cost;
pub mod medical_ai;
pub mod misinformation;
pub mod privacy_surveillance;
pub mod work_automation;

pub use ai_companions::AiCompanionsPack;
pub use ai_governance::AiGovernancePack;
pub use algorithmic_bias::AlgorithmicBiasPack;
pub use autonomous_vehicles::AutonomousVehiclesPack;
pub use autonomous_weapons::AutonomousWeaponsPack;
pub use environmental_cost::EnvironmentalCostPack;
pub use medical_ai::MedicalAiPack;
pub use misinformation::MisinformationPack;
pub use privacy_surveillance::PrivacySurveillancePack;
pub use work_automation::WorkAutomationPack;

use catalog::types::{Scenario, ScenarioStub};

/// Trait for category-specific content providers.
pub trait ContentPack: Send + Sync {
    /// The category this pack fills, with embedded scenario previews.
    fn category(&self) -> catalog::types::Category;

    /// Full scenario records, in presentation order.
    fn scenarios(&self) -> Vec<Scenario>;

    /// Id of the category's learning lab, if the pack ships one.
    fn lab_id(&self) -> Option<&'static str> {
        None
    }
}

/// Build embedded previews from a pack's full scenarios.
pub fn stubs(scenarios: &[Scenario]) -> Vec<ScenarioStub> {
    scenarios
        .iter()
        .map(|s| ScenarioStub {
            id: s.id.clone(),
            title: s.title.clone(),
            description: s.description.clone(),
            difficulty: s.difficulty,
        })
        .collect()
}
