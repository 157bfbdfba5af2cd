//! Google Tag Manager container export, as produced by "Export Container"
use serde::Serialize;
use serde_json::Value;

/// Version of the export envelope this crate writes
pub const EXPORT_FORMAT_VERSION: u32 = 2;

/// The converted container uses a single draft version
pub const CONTAINER_VERSION_ID: &str = "0";

/// Destination tags are always custom HTML
pub const HTML_TAG_TYPE: &str = "html";

/// Kind of destination trigger filter produced from a source condition
pub const CONDITION_FILTER_TYPE: &str = "condition";

/// Constant-valued user-defined variable
pub const CONSTANT_VARIABLE_TYPE: &str = "c";

pub const TEMPLATE_PARAMETER_TYPE: &str = "template";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerExport {
    pub export_format_version: u32,
    /// UTC, `YYYY-MM-DD HH:MM:SS`
    pub export_time: String,
    pub container_version: ContainerVersion,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVersion {
    pub path: String,
    pub account_id: String,
    pub container_id: String,
    pub container_version_id: String,
    pub container: Container,
    pub tag: Vec<Tag>,
    pub trigger: Vec<Trigger>,
    pub variable: Vec<Variable>,
    pub built_in_variable: Vec<BuiltInVariable>,
    pub folder: Vec<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub path: String,
    pub account_id: String,
    pub container_id: String,
    pub name: String,
    pub public_id: String,
    pub usage_context: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub account_id: String,
    pub container_id: String,
    pub trigger_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub filter: Vec<Filter>,
}

#[derive(Debug, Serialize)]
pub struct Filter {
    #[serde(rename = "type")]
    pub filter_type: String,
    pub parameter: Vec<Parameter>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub account_id: String,
    pub container_id: String,
    pub tag_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: String,
    pub parameter: Vec<Parameter>,
    pub firing_trigger_id: Vec<String>,
    pub tag_firing_option: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub param_type: String,
    pub key: String,
    pub value: Value,
}

impl Parameter {
    pub fn template(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param_type: TEMPLATE_PARAMETER_TYPE.to_string(),
            key: key.into(),
            value: Value::String(value.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub account_id: String,
    pub container_id: String,
    pub variable_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub variable_type: String,
    pub parameter: Vec<Parameter>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltInVariable {
    pub account_id: String,
    pub container_id: String,
    #[serde(rename = "type")]
    pub variable_type: String,
    pub name: String,
}

/// Built-in variables every converted container declares: (type, display name)
pub const BUILT_IN_VARIABLES: [(&str, &str); 4] = [
    ("PAGE_URL", "Page URL"),
    ("PAGE_HOSTNAME", "Page Hostname"),
    ("PAGE_PATH", "Page Path"),
    ("REFERRER", "Referrer"),
];
