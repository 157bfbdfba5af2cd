//! Vendor enum translation tables.
//!
//! These are data rather than logic: both vendors' enum values drift over time,
//! so every table can be overridden from the config file. Overrides are layered
//! on top of the defaults, a section only needs to mention what it changes.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Source value -> destination value, with a value for everything unlisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationTable {
    pub fallback: String,
    pub entries: BTreeMap<String, String>,
}

impl TranslationTable {
    pub fn new(fallback: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            fallback: fallback.to_string(),
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Exact match on `key`, otherwise the fallback
    pub fn translate(&self, key: Option<&str>) -> &str {
        key.and_then(|k| self.entries.get(k))
            .unwrap_or(&self.fallback)
    }

    fn apply(&mut self, overrides: TableOverride) {
        if let Some(fallback) = overrides.fallback {
            self.fallback = fallback;
        }
        self.entries.extend(overrides.entries);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableOverrides")]
pub struct MappingTables {
    /// Trigger event types
    pub event_types: TranslationTable,
    /// Tag parameter value types
    pub parameter_types: TranslationTable,
    /// Tag firing limits
    pub firing_options: TranslationTable,
    /// Trigger condition operator -> filter match type. No fallback: conditions
    /// with an unlisted operator are left out.
    pub condition_operators: BTreeMap<String, String>,
}

impl MappingTables {
    pub fn condition_match_type(&self, operator: &str) -> Option<&str> {
        self.condition_operators.get(operator).map(String::as_str)
    }
}

impl Default for MappingTables {
    fn default() -> Self {
        Self {
            event_types: TranslationTable::new(
                "custom_event",
                &[
                    ("pageview", "pageview"),
                    ("click", "click"),
                    ("form_submit", "form_submission"),
                    ("history_change", "history_change"),
                    ("timer", "timer"),
                    ("custom_event", "custom_event"),
                ],
            ),
            parameter_types: TranslationTable::new(
                "template",
                &[
                    ("template", "template"),
                    ("string", "template"),
                    ("text", "template"),
                    ("boolean", "boolean"),
                    ("integer", "integer"),
                    ("number", "integer"),
                    ("list", "list"),
                    ("map", "map"),
                    ("tag_reference", "tagReference"),
                    ("trigger_reference", "triggerReference"),
                ],
            ),
            firing_options: TranslationTable::new(
                "oncePerEvent",
                &[
                    ("once_per_event", "oncePerEvent"),
                    ("once_per_page", "oncePerLoad"),
                    ("once_per_load", "oncePerLoad"),
                    ("unlimited", "unlimited"),
                ],
            ),
            condition_operators: [
                ("equals", "EQUALS"),
                ("eq", "EQUALS"),
                ("contains", "CONTAINS"),
                ("starts_with", "STARTS_WITH"),
                ("ends_with", "ENDS_WITH"),
                ("regex", "MATCH_REGEX"),
                ("matches_regex", "MATCH_REGEX"),
                ("css_selector", "CSS_SELECTOR"),
                ("less_than", "LESS"),
                ("lt", "LESS"),
                ("greater_than", "GREATER"),
                ("gt", "GREATER"),
                ("less_or_equal", "LESS_OR_EQUALS"),
                ("lte", "LESS_OR_EQUALS"),
                ("greater_or_equal", "GREATER_OR_EQUALS"),
                ("gte", "GREATER_OR_EQUALS"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        }
    }
}

/// One table as written in the config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableOverride {
    fallback: Option<String>,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// `[tables]` as written in the config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TableOverrides {
    event_types: TableOverride,
    parameter_types: TableOverride,
    firing_options: TableOverride,
    condition_operators: BTreeMap<String, String>,
}

impl From<TableOverrides> for MappingTables {
    fn from(overrides: TableOverrides) -> Self {
        let mut tables = MappingTables::default();
        tables.event_types.apply(overrides.event_types);
        tables.parameter_types.apply(overrides.parameter_types);
        tables.firing_options.apply(overrides.firing_options);
        tables
            .condition_operators
            .extend(overrides.condition_operators);
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_missing_keys_fall_back() {
        let tables = MappingTables::default();

        assert_eq!(tables.event_types.translate(Some("form_submit")), "form_submission");
        assert_eq!(tables.event_types.translate(Some("scroll")), "custom_event");
        assert_eq!(tables.event_types.translate(None), "custom_event");
        assert_eq!(tables.parameter_types.translate(Some("weird")), "template");
        assert_eq!(tables.firing_options.translate(Some("once_per_page")), "oncePerLoad");
        assert_eq!(tables.condition_match_type("contains"), Some("CONTAINS"));
        assert_eq!(tables.condition_match_type("sounds_like"), None);
    }

    #[test]
    fn overrides_layer_on_defaults() {
        let tables: MappingTables = toml::from_str(
            r#"
            [event_types]
            fallback = "pageview"

            [event_types.entries]
            scroll = "scroll_depth"
            click = "linkClick"

            [condition_operators]
            sounds_like = "MATCH_REGEX"
            "#,
        )
        .unwrap();

        assert_eq!(tables.event_types.translate(Some("scroll")), "scroll_depth");
        assert_eq!(tables.event_types.translate(Some("click")), "linkClick");
        assert_eq!(tables.event_types.translate(Some("timer")), "timer");
        assert_eq!(tables.event_types.translate(Some("nope")), "pageview");
        assert_eq!(tables.condition_match_type("sounds_like"), Some("MATCH_REGEX"));
        assert_eq!(tables.condition_match_type("contains"), Some("CONTAINS"));
        assert_eq!(tables.parameter_types, MappingTables::default().parameter_types);
    }

    #[test]
    fn rejects_misspelt_sections() {
        let result = toml::from_str::<MappingTables>("[event_type]\nfallback = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn printed_tables_read_back() {
        let tables = MappingTables::default();
        let printed = toml::to_string(&tables).unwrap();
        let reread: MappingTables = toml::from_str(&printed).unwrap();

        assert_eq!(reread, tables);
    }
}
