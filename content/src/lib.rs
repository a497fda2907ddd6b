//! Built-in content for the ethics-scenario catalog.
//!
//! This crate ships the application's authored catalog: ten category packs
//! of ethical-dilemma scenarios and the learning-lab documents for the
//! categories that have one. Labs are embedded JSON, parsed into a
//! [`catalog::StaticLabSource`] so they still load lazily through the
//! registry's repository rather than at registration time.
//!
//! # Example
//!
//! ```ignore
//! use catalog::CatalogConfig;
//! use catalog_content::seed_catalog;
//!
//! let registry = seed_catalog(CatalogConfig::default()).await?;
//! let views = registry.categories_with_content().await;
//! ```

pub mod packs;

use std::sync::Arc;

use catalog::{CatalogConfig, ContentRegistry, StaticLabSource};

pub use packs::ContentPack;

/// Error types for content seeding.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// An embedded lab document failed to parse
    #[error("Malformed embedded lab document {name}: {source}")]
    MalformedLab {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Embedded learning-lab documents, one JSON file per lab.
const EMBEDDED_LABS: &[(&str, &str)] = &[
    (
        "autonomous-vehicles-lab",
        include_str!("../labs/autonomous-vehicles-lab.json"),
    ),
    (
        "algorithmic-bias-lab",
        include_str!("../labs/algorithmic-bias-lab.json"),
    ),
    (
        "privacy-surveillance-lab",
        include_str!("../labs/privacy-surveillance-lab.json"),
    ),
    ("medical-ai-lab", include_str!("../labs/medical-ai-lab.json")),
    (
        "ai-governance-lab",
        include_str!("../labs/ai-governance-lab.json"),
    ),
];

/// All built-in content packs, in presentation order.
pub fn builtin_packs() -> Vec<Box<dyn ContentPack>> {
    vec![
        Box::new(packs::AutonomousVehiclesPack),
        Box::new(packs::AlgorithmicBiasPack),
        Box::new(packs::PrivacySurveillancePack),
        Box::new(packs::MedicalAiPack),
        Box::new(packs::AutonomousWeaponsPack),
        Box::new(packs::MisinformationPack),
        Box::new(packs::WorkAutomationPack),
        Box::new(packs::AiCompanionsPack),
        Box::new(packs::EnvironmentalCostPack),
        Box::new(packs::AiGovernancePack),
    ]
}

/// Parse the embedded lab documents into a lab source.
pub fn embedded_lab_source() -> Result<StaticLabSource, ContentError> {
    let mut source = StaticLabSource::new();
    for (name, raw) in EMBEDDED_LABS.iter().copied() {
        let lab = serde_json::from_str(raw)
            .map_err(|e| ContentError::MalformedLab { name, source: e })?;
        source = source.with_lab(lab);
    }
    Ok(source)
}

/// Register every built-in pack into an existing registry.
///
/// Labs are mapped for lazy loading, not loaded here; the registry's own
/// lab source must be able to serve the pack lab ids (see
/// [`embedded_lab_source`]).
pub async fn seed_into(registry: &ContentRegistry) {
    for pack in builtin_packs() {
        let category = pack.category();
        let category_id = category.id.clone();
        registry.register_category(category).await;
        for scenario in pack.scenarios() {
            registry.register_scenario(scenario).await;
        }
        if let Some(lab_id) = pack.lab_id() {
            registry.map_learning_lab(category_id.clone(), lab_id).await;
        }
        tracing::debug!(category_id = %category_id, "Seeded content pack");
    }
}

/// Build a fully seeded registry backed by the embedded lab documents.
pub async fn seed_catalog(config: CatalogConfig) -> Result<ContentRegistry, ContentError> {
    let source = embedded_lab_source()?;
    let registry = ContentRegistry::with_source(config, Arc::new(source));
    seed_into(&registry).await;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CatalogQuery, ContentKind, Difficulty};

    async fn seeded() -> ContentRegistry {
        seed_catalog(CatalogConfig::default()).await.unwrap()
    }

    #[test]
    fn test_embedded_labs_parse() {
        let source = embedded_lab_source().unwrap();
        assert_eq!(source.len(), 5);
    }

    #[tokio::test]
    async fn test_seeded_catalog_shape() {
        let registry = seeded().await;
        assert_eq!(registry.category_count().await, 10);
        assert!(registry.scenario_count().await >= 20);

        // Every scenario back-reference resolves; the seeded catalog is clean.
        assert!(registry.validate().await.is_empty());
    }

    #[tokio::test]
    async fn test_category_views_follow_pack_order() {
        let registry = seeded().await;
        let views = registry.categories_with_content().await;
        assert_eq!(views.len(), 10);
        assert_eq!(views[0].category.id, "autonomous-vehicles");
        assert_eq!(views[0].scenario_count, views[0].scenarios.len());

        // Labs resolve for categories that ship one and stay None otherwise.
        assert!(views[0].learning_lab.is_some());
        let weapons = views
            .iter()
            .find(|v| v.category.id == "autonomous-weapons")
            .unwrap();
        assert!(weapons.learning_lab.is_none());
    }

    #[tokio::test]
    async fn test_trolley_search_finds_tunnel_dilemma() {
        let registry = seeded().await;
        let results = registry
            .search(
                &CatalogQuery::new()
                    .with_search("trolley")
                    .with_kind(ContentKind::Scenario),
            )
            .await;
        assert!(results
            .scenarios
            .iter()
            .any(|s| s.id == "av-tunnel-dilemma"));
    }

    #[tokio::test]
    async fn test_advanced_filter_returns_only_advanced() {
        let registry = seeded().await;
        let results = registry
            .search(&CatalogQuery::new().with_difficulty(Difficulty::Advanced))
            .await;
        assert!(!results.categories.is_empty());
        assert!(results
            .categories
            .iter()
            .all(|c| c.difficulty == Difficulty::Advanced));
        assert!(results
            .scenarios
            .iter()
            .all(|s| s.difficulty == Difficulty::Advanced));
    }

    #[tokio::test]
    async fn test_lab_loads_lazily_and_memoizes() {
        let registry = seeded().await;
        let first = registry
            .learning_lab_for_category("medical-ai")
            .await
            .unwrap();
        let second = registry
            .learning_lab_for_category("medical-ai")
            .await
            .unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert_eq!(first.category_id, "medical-ai");
        assert!(!first.phases.is_empty());
    }

    #[tokio::test]
    async fn test_export_import_round_trip_on_seeded_catalog() {
        let registry = seeded().await;
        // Touch one lab so the snapshot carries a loaded lab.
        registry.learning_lab_for_category("ai-governance").await;

        let snapshot = registry.export_json().await.unwrap();
        let fresh = ContentRegistry::new();
        fresh.import_json(snapshot).await.unwrap();

        assert_eq!(
            fresh.category_count().await,
            registry.category_count().await
        );
        assert_eq!(
            fresh.scenario_count().await,
            registry.scenario_count().await
        );
        assert_eq!(fresh.catalog_hash().await, registry.catalog_hash().await);
        // The imported registry has no backing source, but the loaded lab
        // traveled with the snapshot.
        assert!(fresh
            .learning_lab_for_category("ai-governance")
            .await
            .is_some());
    }

    #[tokio::test]
    async fn test_statistics_over_seeded_catalog() {
        let registry = seeded().await;
        let stats = registry.statistics().await;
        assert_eq!(stats.total_categories, 10);
        assert!(stats.average_minutes.is_some());
        assert!(stats.by_approach.get("consequentialism").copied().unwrap_or(0) >= 3);
    }
}
