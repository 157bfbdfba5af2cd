use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::file_parsers::lenient;

/// Tag-manager export being converted away from
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    #[serde(default, deserialize_with = "lenient::record_or_default")]
    pub container_version: SourceContainerVersion,
    /// Keyed by source trigger ID, in document order
    #[serde(default, deserialize_with = "lenient::map_or_default")]
    pub triggers: IndexMap<String, SourceTrigger>,
    /// Keyed by source tag ID, in document order
    #[serde(default, deserialize_with = "lenient::map_or_default")]
    pub tags: IndexMap<String, SourceTag>,
    #[serde(default, deserialize_with = "lenient::seq_or_default")]
    pub variables: Vec<SourceVariable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceContainerVersion {
    #[serde(default, deserialize_with = "lenient::text")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub container_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourceTrigger {
    #[serde(default, deserialize_with = "lenient::record_or_default")]
    pub attributes: TriggerAttributes,
    #[serde(default, deserialize_with = "lenient::seq_or_default")]
    pub conditions: Vec<SourceCondition>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TriggerAttributes {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    /// Event type, e.g. `click` or `form_submit`
    #[serde(default, rename = "type", deserialize_with = "lenient::or_default")]
    pub event_type: Option<String>,
}

/// `{variableName} {operator} {value}`, e.g. `Page URL contains /checkout`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCondition {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub variable_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub operator: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourceTag {
    #[serde(default, deserialize_with = "lenient::record_or_default")]
    pub attributes: TagAttributes,
    /// Source trigger IDs the tag fires on
    #[serde(default, deserialize_with = "lenient::text_seq")]
    pub triggers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagAttributes {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    /// Inline HTML/script body
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub code: Option<String>,
    /// Structured parameters, used when there is no inline code
    #[serde(default, deserialize_with = "lenient::opt_seq_or_default")]
    pub parameters: Option<Vec<SourceParameter>>,
    /// Firing limit, e.g. `once_per_event`
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub firing: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourceParameter {
    #[serde(default, rename = "type", deserialize_with = "lenient::or_default")]
    pub param_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourceVariable {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: Option<String>,
}
