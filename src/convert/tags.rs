use indexmap::IndexMap;
use tracing::{debug, warn};

use super::{identity::Identity, triggers::TriggerIdMap};
use crate::{
    file_parsers::piwik::types::{SourceParameter, SourceTag},
    gtm::{Parameter, Tag, HTML_TAG_TYPE},
    tables::MappingTables,
};

/// Key of the parameter holding a custom HTML tag's body
const HTML_PARAMETER_KEY: &str = "html";

/// Number the tags 1.. in source order and rebuild them as custom HTML tags.
///
/// Trigger references are resolved through `id_map`. References to triggers
/// the source doesn't define are dropped, so a tag can end up with no firing
/// triggers at all.
pub fn translate_tags(
    tags: &IndexMap<String, SourceTag>,
    identity: &Identity,
    id_map: &TriggerIdMap,
    tables: &MappingTables,
) -> Vec<Tag> {
    tags.iter()
        .enumerate()
        .map(|(index, (source_id, tag))| {
            let tag_id = (index + 1).to_string();
            let attributes = &tag.attributes;

            let name = attributes
                .name
                .clone()
                .unwrap_or_else(|| format!("Tag {tag_id}"));

            let parameter = match (&attributes.code, &attributes.parameters) {
                (Some(code), _) => vec![Parameter::template(HTML_PARAMETER_KEY, code.as_str())],
                (None, Some(parameters)) => parameters
                    .iter()
                    .map(|p| translate_parameter(p, tables))
                    .collect(),
                (None, None) => {
                    debug!("Tag {source_id:?} has no code or parameters");
                    vec![Parameter::template(HTML_PARAMETER_KEY, "")]
                }
            };

            let firing_trigger_id = tag
                .triggers
                .iter()
                .filter_map(|trigger| {
                    let resolved = id_map.get(trigger);
                    if resolved.is_none() {
                        warn!("Tag {source_id:?} references unknown trigger {trigger:?}, dropping");
                    }
                    resolved.map(str::to_string)
                })
                .collect();

            let tag_firing_option = tables
                .firing_options
                .translate(attributes.firing.as_deref())
                .to_string();

            Tag {
                account_id: identity.account_id.clone(),
                container_id: identity.container_id.clone(),
                tag_id,
                name,
                tag_type: HTML_TAG_TYPE.to_string(),
                parameter,
                firing_trigger_id,
                tag_firing_option,
            }
        })
        .collect()
}

/// Type goes through the table, key and value are kept as they are
fn translate_parameter(parameter: &SourceParameter, tables: &MappingTables) -> Parameter {
    Parameter {
        param_type: tables
            .parameter_types
            .translate(parameter.param_type.as_deref())
            .to_string(),
        key: parameter.key.clone(),
        value: parameter.value.clone(),
    }
}
