//! Catalog search queries.
//!
//! [`CatalogQuery`] replaces the original ad hoc filter object with a
//! structured value type: every clause is explicitly optional, implemented as
//! its own predicate, and the clauses are combined with logical AND. A clause
//! whose filter field is absent always passes; a clause whose filter field is
//! set fails for records that lack the corresponding value.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Difficulty, LearningLab, Scenario};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Which entity kinds a search should scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Category,
    Scenario,
    LearningLab,
}

/// A structured catalog search query.
///
/// All clauses are ANDed. An empty query matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CatalogQuery {
    /// Exact difficulty match
    pub difficulty: Option<Difficulty>,
    /// Any of these philosophical approaches must be present
    pub approaches: Vec<String>,
    /// Any of these tags must substring-match a record tag (case-insensitive)
    pub tags: Vec<String>,
    /// Free-text term matched against title/description/dilemma/question text
    pub search: Option<String>,
    /// Required target audience
    pub target_audience: Option<String>,
    /// Upper bound on estimated time, in minutes
    pub max_minutes: Option<u32>,
    /// Entity kinds to scan; empty means all three
    pub kinds: Vec<ContentKind>,
}

impl CatalogQuery {
    /// Create an empty query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: require an exact difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Builder: require a philosophical approach.
    pub fn with_approach(mut self, approach: impl Into<String>) -> Self {
        self.approaches.push(approach.into());
        self
    }

    /// Builder: require a tag match.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builder: set the free-text search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Builder: require a target audience.
    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    /// Builder: cap estimated time.
    pub fn with_max_minutes(mut self, minutes: u32) -> Self {
        self.max_minutes = Some(minutes);
        self
    }

    /// Builder: restrict the scan to one entity kind.
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Check whether a given kind should be scanned.
    pub fn scans(&self, kind: ContentKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }

    /// Evaluate the full conjunction against one record.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.matches_difficulty(record)
            && self.matches_approaches(record)
            && self.matches_tags(record)
            && self.matches_search(record)
            && self.matches_audience(record)
            && self.matches_minutes(record)
    }

    fn matches_difficulty<T: Filterable>(&self, record: &T) -> bool {
        match self.difficulty {
            None => true,
            Some(wanted) => record.difficulty() == Some(wanted),
        }
    }

    fn matches_approaches<T: Filterable>(&self, record: &T) -> bool {
        if self.approaches.is_empty() {
            return true;
        }
        let have = record.approaches();
        self.approaches.iter().any(|a| have.iter().any(|h| h == a))
    }

    fn matches_tags<T: Filterable>(&self, record: &T) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let have: Vec<String> = record.tags().iter().map(|t| t.to_lowercase()).collect();
        self.tags
            .iter()
            .map(|t| t.to_lowercase())
            .any(|wanted| have.iter().any(|h| h.contains(&wanted)))
    }

    fn matches_search<T: Filterable>(&self, record: &T) -> bool {
        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                record.search_text().to_lowercase().contains(&term)
            }
        }
    }

    fn matches_audience<T: Filterable>(&self, record: &T) -> bool {
        match &self.target_audience {
            None => true,
            Some(wanted) => record.target_audiences().iter().any(|a| a == wanted),
        }
    }

    fn matches_minutes<T: Filterable>(&self, record: &T) -> bool {
        match self.max_minutes {
            None => true,
            Some(cap) => match record.estimated_minutes() {
                Some(minutes) => minutes <= cap,
                None => false,
            },
        }
    }
}

/// Accessors the query clauses evaluate against.
///
/// Each entity kind exposes whatever subset of the filterable fields it
/// carries; missing fields fail their clause when the clause is active.
pub trait Filterable {
    /// Difficulty, if the entity carries one.
    fn difficulty(&self) -> Option<Difficulty>;

    /// Philosophical approaches.
    fn approaches(&self) -> &[String];

    /// Free-text tags.
    fn tags(&self) -> &[String];

    /// Concatenated text scanned by the free-text clause.
    fn search_text(&self) -> String;

    /// Target audiences.
    fn target_audiences(&self) -> &[String];

    /// Estimated time in minutes, if defined.
    fn estimated_minutes(&self) -> Option<u32>;
}

impl Filterable for Category {
    fn difficulty(&self) -> Option<Difficulty> {
        Some(self.difficulty)
    }

    fn approaches(&self) -> &[String] {
        &self.philosophical_approaches
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    fn target_audiences(&self) -> &[String] {
        &self.target_audiences
    }

    fn estimated_minutes(&self) -> Option<u32> {
        self.estimated_minutes
    }
}

impl Filterable for Scenario {
    fn difficulty(&self) -> Option<Difficulty> {
        Some(self.difficulty)
    }

    fn approaches(&self) -> &[String] {
        &self.philosophical_approaches
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.description, self.dilemma, self.ethical_question
        )
    }

    fn target_audiences(&self) -> &[String] {
        &[]
    }

    fn estimated_minutes(&self) -> Option<u32> {
        None
    }
}

impl Filterable for LearningLab {
    fn difficulty(&self) -> Option<Difficulty> {
        None
    }

    fn approaches(&self) -> &[String] {
        &[]
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.overview)
    }

    fn target_audiences(&self) -> &[String] {
        &[]
    }

    fn estimated_minutes(&self) -> Option<u32> {
        None
    }
}

/// Results of a catalog search, grouped by entity kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SearchResults {
    /// Matching categories
    pub categories: Vec<Category>,
    /// Matching scenarios
    pub scenarios: Vec<Scenario>,
    /// Matching learning labs (loaded ones only)
    pub learning_labs: Vec<LearningLab>,
}

impl SearchResults {
    /// Total number of matches across all kinds.
    pub fn len(&self) -> usize {
        self.categories.len() + self.scenarios.len() + self.learning_labs.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(title: &str, dilemma: &str, difficulty: Difficulty) -> Scenario {
        Scenario {
            id: "s1".to_string(),
            category_id: "c1".to_string(),
            title: title.to_string(),
            description: "A test scenario".to_string(),
            difficulty,
            dilemma: dilemma.to_string(),
            ethical_question: "What should be done?".to_string(),
            philosophical_approaches: vec!["utilitarianism".to_string()],
            search_keywords: vec![],
            tags: vec!["vehicles".to_string()],
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let s = scenario("Tunnel Dilemma", "A runaway tram", Difficulty::Beginner);
        assert!(CatalogQuery::new().matches(&s));
    }

    #[test]
    fn test_difficulty_exact_match() {
        let s = scenario("Tunnel Dilemma", "A runaway tram", Difficulty::Advanced);
        assert!(CatalogQuery::new()
            .with_difficulty(Difficulty::Advanced)
            .matches(&s));
        assert!(!CatalogQuery::new()
            .with_difficulty(Difficulty::Beginner)
            .matches(&s));
    }

    #[test]
    fn test_difficulty_excludes_records_without_field() {
        let lab = LearningLab {
            id: "lab1".to_string(),
            category_id: "c1".to_string(),
            title: "Lab".to_string(),
            overview: "Overview".to_string(),
            learning_objectives: vec![],
            phases: vec![],
            assessment_rubric: Default::default(),
        };
        assert!(!CatalogQuery::new()
            .with_difficulty(Difficulty::Beginner)
            .matches(&lab));
    }

    #[test]
    fn test_search_is_case_insensitive_over_text_fields() {
        let s = scenario(
            "Tunnel Dilemma",
            "A runaway trolley approaches a fork",
            Difficulty::Beginner,
        );
        assert!(CatalogQuery::new().with_search("TROLLEY").matches(&s));

        let other = scenario("Tunnel Dilemma", "A stalled truck", Difficulty::Beginner);
        assert!(!CatalogQuery::new().with_search("trolley").matches(&other));
    }

    #[test]
    fn test_tag_substring_match() {
        let s = scenario("Tunnel Dilemma", "A runaway tram", Difficulty::Beginner);
        assert!(CatalogQuery::new().with_tag("Vehicle").matches(&s));
        assert!(!CatalogQuery::new().with_tag("medicine").matches(&s));
    }

    #[test]
    fn test_clauses_are_conjunctive() {
        let s = scenario("Tunnel Dilemma", "A runaway tram", Difficulty::Beginner);
        let query = CatalogQuery::new()
            .with_difficulty(Difficulty::Beginner)
            .with_search("submarine");
        assert!(!query.matches(&s));
    }

    #[test]
    fn test_max_minutes_excludes_records_without_estimate() {
        let s = scenario("Tunnel Dilemma", "A runaway tram", Difficulty::Beginner);
        assert!(!CatalogQuery::new().with_max_minutes(30).matches(&s));
    }

    #[test]
    fn test_kinds_default_to_all() {
        let query = CatalogQuery::new();
        assert!(query.scans(ContentKind::Category));
        assert!(query.scans(ContentKind::Scenario));
        assert!(query.scans(ContentKind::LearningLab));

        let only_scenarios = CatalogQuery::new().with_kind(ContentKind::Scenario);
        assert!(only_scenarios.scans(ContentKind::Scenario));
        assert!(!only_scenarios.scans(ContentKind::Category));
    }
}
