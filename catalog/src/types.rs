//! Core types for the ethics-scenario catalog.
//!
//! These types model the three entity kinds the catalog tracks: categories,
//! scenarios, and learning labs, plus the bookkeeping metadata the registry
//! stamps onto records at insert time.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs for consistency with the consuming frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Difficulty rating shared by categories and scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Introductory material, no prior exposure assumed
    Beginner,
    /// Assumes familiarity with the basic ethical frameworks
    Intermediate,
    /// Open-ended dilemmas with no settled answer
    Advanced,
}

impl Difficulty {
    /// Get string representation for display and search.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

/// A themed group of related ethics scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Short description shown in category listings
    pub description: String,
    /// Icon name used by the frontend
    pub icon: String,
    /// Overall difficulty of the category
    pub difficulty: Difficulty,
    /// Estimated time to complete, in minutes
    pub estimated_minutes: Option<u32>,
    /// Embedded scenario previews, in presentation order
    pub scenarios: Vec<ScenarioStub>,
    /// Free-text tags
    pub tags: Vec<String>,
    /// What the learner should take away
    pub learning_objectives: Vec<String>,
    /// Philosophical frameworks the category exercises
    pub philosophical_approaches: Vec<String>,
    /// Intended audiences (e.g. "high-school", "professional")
    pub target_audiences: Vec<String>,
}

/// A scenario preview embedded inside a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ScenarioStub {
    /// Identifier of the full scenario record
    pub id: String,
    /// Title shown in the category grid
    pub title: String,
    /// One-line description
    pub description: String,
    /// Difficulty of this scenario
    pub difficulty: Difficulty,
}

/// A single ethical-dilemma unit belonging to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Scenario {
    /// Unique identifier
    pub id: String,
    /// Owning category (back-reference, not ownership)
    pub category_id: String,
    /// Human-readable title
    pub title: String,
    /// Framing description
    pub description: String,
    /// Difficulty of this scenario
    pub difficulty: Difficulty,
    /// The dilemma text presented to the learner
    pub dilemma: String,
    /// The central ethical question
    pub ethical_question: String,
    /// Philosophical frameworks relevant to the dilemma
    pub philosophical_approaches: Vec<String>,
    /// Keywords used by free-text search
    pub search_keywords: Vec<String>,
    /// Free-text tags
    pub tags: Vec<String>,
}

/// A structured multi-phase educational guide for a category.
///
/// Loaded on demand through a [`crate::labs::LabSource`], never at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct LearningLab {
    /// Unique identifier
    pub id: String,
    /// Category this lab belongs to
    pub category_id: String,
    /// Human-readable title
    pub title: String,
    /// Overview text shown before the first phase
    pub overview: String,
    /// What the lab teaches
    pub learning_objectives: Vec<String>,
    /// Ordered phases of the lab
    pub phases: Vec<LabPhase>,
    /// Assessment rubric for the lab
    pub assessment_rubric: AssessmentRubric,
}

/// One phase of a learning lab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct LabPhase {
    /// Phase name (e.g. "Explore", "Debate")
    pub name: String,
    /// Estimated duration in minutes
    pub duration_minutes: u32,
    /// Activities carried out during the phase
    pub activities: Vec<String>,
    /// Supporting resources
    pub resources: Vec<String>,
}

/// Assessment rubric: criteria crossed with proficiency-level descriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AssessmentRubric {
    /// Rubric rows, one per assessed criterion
    pub criteria: Vec<RubricCriterion>,
}

/// One assessed criterion with per-level descriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RubricCriterion {
    /// What is being assessed
    pub name: String,
    /// Description of emerging proficiency
    pub emerging: String,
    /// Description of developing proficiency
    pub developing: String,
    /// Description of proficient work
    pub proficient: String,
}

/// Bookkeeping stamped onto records by the registry at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RegistrationMeta {
    /// When the record was registered
    pub registered_at: DateTime<Utc>,
    /// Schema version the record was registered under
    pub schema_version: String,
}

impl RegistrationMeta {
    /// Stamp a record with the current time and the given schema version.
    pub fn stamp(schema_version: impl Into<String>) -> Self {
        Self {
            registered_at: Utc::now(),
            schema_version: schema_version.into(),
        }
    }
}

/// A registered category plus its registry bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CategoryRecord {
    /// The category payload
    pub category: Category,
    /// Registry bookkeeping
    pub meta: RegistrationMeta,
}

/// A registered scenario plus its registry bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ScenarioRecord {
    /// The scenario payload
    pub scenario: Scenario,
    /// Registry bookkeeping
    pub meta: RegistrationMeta,
}

/// A category enriched with its resolved scenarios and learning lab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CategoryView {
    /// The category payload
    pub category: Category,
    /// Full scenario records, in registration order
    pub scenarios: Vec<Scenario>,
    /// Number of registered scenarios for this category
    pub scenario_count: usize,
    /// The category's learning lab, if one exists and loaded cleanly
    pub learning_lab: Option<LearningLab>,
}

/// Aggregate statistics over the registered catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CatalogStatistics {
    /// Number of distinct registered categories
    pub total_categories: usize,
    /// Number of distinct registered scenarios
    pub total_scenarios: usize,
    /// Number of learning labs currently loaded or registered
    pub total_learning_labs: usize,
    /// Category counts per difficulty
    pub by_difficulty: std::collections::HashMap<String, usize>,
    /// Category counts per philosophical approach (multi-count per category)
    pub by_approach: std::collections::HashMap<String, usize>,
    /// Mean estimated_minutes over categories that define it
    pub average_minutes: Option<f64>,
}

/// A referential-integrity finding from [`crate::registry::ContentRegistry::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IntegrityFinding {
    /// A scenario references a category that was never registered
    DanglingScenarioCategory {
        /// The offending scenario
        scenario_id: String,
        /// The missing category
        category_id: String,
    },
    /// A learning-lab mapping references a category that was never registered
    DanglingLabCategory {
        /// The offending lab
        lab_id: String,
        /// The missing category
        category_id: String,
    },
}
