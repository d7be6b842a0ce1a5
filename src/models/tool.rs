// src/models/tool.rs
use super::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tool {
    pub id: EntityId,
    pub tool_name: String,
    #[serde(default)]
    pub use_case: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub pricing_type: PricingType,
    #[serde(default, deserialize_with = "rating_or_zero")]
    pub avg_rating: f64, // aggregate computed by the backend, 0-5
}

fn rating_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl Tool {
    pub fn use_case_or(&self, fallback: &'static str) -> String {
        non_empty(self.use_case.as_deref()).unwrap_or(fallback).to_string()
    }

    pub fn category_or(&self, fallback: &'static str) -> String {
        non_empty(self.category.as_deref()).unwrap_or(fallback).to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Pricing model. Labels the client doesn't know are kept as sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum PricingType {
    #[default]
    Free,
    Freemium,
    Paid,
    Other(String),
}

impl PricingType {
    /// Options offered by the add/edit and filter forms.
    pub const CHOICES: [PricingType; 3] = [PricingType::Free, PricingType::Freemium, PricingType::Paid];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "FREE",
            Self::Freemium => "FREEMIUM",
            Self::Paid => "PAID",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for PricingType {
    fn from(label: String) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "FREE" => Self::Free,
            "FREEMIUM" => Self::Freemium,
            "PAID" => Self::Paid,
            _ => Self::Other(label),
        }
    }
}

impl From<PricingType> for String {
    fn from(pricing: PricingType) -> Self {
        pricing.as_str().to_string()
    }
}

impl fmt::Display for PricingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /admin/add_tool`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewTool {
    pub tool_name: String,
    pub use_case: String,
    pub category: String,
    pub pricing_type: PricingType,
    pub avg_rating: f64,
}

/// Body of `PUT /admin/Update_tool/{id}`. Absent fields are left untouched.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ToolPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<PricingType>,
}

/// Query of `GET /admin/tools/search`. Blank values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolFilter {
    pub category: Option<String>,
    pub pricing_type: Option<String>,
    pub min_rating: Option<String>,
}

impl ToolFilter {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn pricing_type(mut self, pricing_type: impl Into<String>) -> Self {
        self.pricing_type = Some(pricing_type.into());
        self
    }

    pub fn min_rating(mut self, min_rating: impl Into<String>) -> Self {
        self.min_rating = Some(min_rating.into());
        self
    }

    /// `key=value` pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("category", self.category.as_deref()),
            ("pricing_type", self.pricing_type.as_deref()),
            ("min_rating", self.min_rating.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.map(str::trim).filter(|v| !v.is_empty())?;
            Some((key, value))
        })
        .collect()
    }

    /// Encoded query string including the leading `?`, or empty without filters.
    pub fn query_string(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tool_with_missing_optionals() {
        let tool: Tool = serde_json::from_str(
            r#"{"id": 3, "tool_name": "GPT Helper", "pricing_type": "FREEMIUM", "avg_rating": null}"#,
        )
        .unwrap();
        assert_eq!(tool.id.as_str(), "3");
        assert_eq!(tool.pricing_type, PricingType::Freemium);
        assert_eq!(tool.avg_rating, 0.0);
        assert_eq!(tool.use_case_or("No description"), "No description");
        assert_eq!(tool.category_or("Uncategorized"), "Uncategorized");
    }

    #[test]
    fn unknown_pricing_is_kept_verbatim() {
        let pricing: PricingType = serde_json::from_str(r#""Subscription""#).unwrap();
        assert_eq!(pricing, PricingType::Other("Subscription".into()));
        assert_eq!(serde_json::to_string(&pricing).unwrap(), r#""Subscription""#);
    }

    #[test]
    fn new_forms_default_to_free() {
        assert_eq!(PricingType::default(), PricingType::Free);
    }

    #[test]
    fn empty_filter_has_no_query() {
        assert_eq!(ToolFilter::default().query_string(), "");
        assert_eq!(ToolFilter::default().category("  ").query_string(), "");
    }

    #[test]
    fn filter_encodes_values_in_order() {
        let filter = ToolFilter::default()
            .min_rating("4")
            .category("Image & Video")
            .pricing_type("PAID");
        assert_eq!(
            filter.query_string(),
            "?category=Image%20%26%20Video&pricing_type=PAID&min_rating=4"
        );
    }

    #[test]
    fn patch_skips_absent_fields() {
        let patch = ToolPatch {
            tool_name: Some("Renamed".into()),
            ..ToolPatch::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"tool_name":"Renamed"}"#);
    }
}
