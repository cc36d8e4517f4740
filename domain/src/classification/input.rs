//! Classification input

use serde::{Deserialize, Serialize};

/// A charity's profile as collected by the questionnaire
///
/// Every field is optional; the JSON form accepts both `camelCase` and
/// `snake_case` keys so it can be fed straight from the form state.
///
/// # Example
///
/// ```
/// use prospie_domain::ClassificationInput;
///
/// let input = ClassificationInput::new()
///     .with_activities("We support care-experienced young people into education")
///     .with_areas(["Bristol"])
///     .with_existing_keywords(["Youth"]);
/// assert_eq!(input.areas, vec!["Bristol".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassificationInput {
    pub activities: Option<String>,
    pub objectives: Option<String>,
    pub areas: Vec<String>,
    pub beneficiaries: Vec<String>,
    pub causes: Vec<String>,
    #[serde(alias = "existing_keywords")]
    pub existing_keywords: Vec<String>,
}

impl ClassificationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(mut self, activities: impl Into<String>) -> Self {
        self.activities = Some(activities.into());
        self
    }

    pub fn with_objectives(mut self, objectives: impl Into<String>) -> Self {
        self.objectives = Some(objectives.into());
        self
    }

    pub fn with_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_beneficiaries<I, S>(mut self, beneficiaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.beneficiaries = beneficiaries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_causes<I, S>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.causes = causes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_existing_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// True when there is nothing to search and nothing to seed.
    pub fn is_empty(&self) -> bool {
        let blank = |text: &Option<String>| text.as_deref().is_none_or(|t| t.trim().is_empty());
        blank(&self.activities)
            && blank(&self.objectives)
            && self.areas.is_empty()
            && self.beneficiaries.is_empty()
            && self.causes.is_empty()
            && self.existing_keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "activities": "We run an after-school club",
            "areas": ["Bristol", "Bath"],
            "existingKeywords": ["Youth"]
        }"#;
        let input: ClassificationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.activities.as_deref(), Some("We run an after-school club"));
        assert_eq!(input.areas.len(), 2);
        assert!(input.beneficiaries.is_empty());
        assert_eq!(input.existing_keywords, vec!["Youth".to_string()]);
    }

    #[test]
    fn test_deserialize_snake_case_keywords() {
        let input: ClassificationInput =
            serde_json::from_str(r#"{"existing_keywords": ["Arts"]}"#).unwrap();
        assert_eq!(input.existing_keywords, vec!["Arts".to_string()]);
    }

    #[test]
    fn test_is_empty() {
        assert!(ClassificationInput::new().is_empty());
        assert!(ClassificationInput::new().with_activities("   ").is_empty());
        assert!(!ClassificationInput::new().with_causes(["Health"]).is_empty());
    }
}
