use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use super::identity::Identity;
use crate::{
    file_parsers::piwik::types::{SourceCondition, SourceTrigger},
    gtm::{Filter, Parameter, Trigger, CONDITION_FILTER_TYPE},
    tables::MappingTables,
};

/// Event type assumed when the source trigger doesn't declare one
const DEFAULT_SOURCE_EVENT_TYPE: &str = "custom_event";

/// Source trigger ID -> destination trigger ID, for a single conversion
#[derive(Debug, Default)]
pub struct TriggerIdMap(HashMap<String, String>);

impl TriggerIdMap {
    pub fn get(&self, source_id: &str) -> Option<&str> {
        self.0.get(source_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Number the triggers 1.. in source order and rebuild their filters
pub fn translate_triggers(
    triggers: &IndexMap<String, SourceTrigger>,
    identity: &Identity,
    tables: &MappingTables,
) -> (Vec<Trigger>, TriggerIdMap) {
    let mut id_map = TriggerIdMap::default();

    let translated = triggers
        .iter()
        .enumerate()
        .map(|(index, (source_id, trigger))| {
            let trigger_id = (index + 1).to_string();
            let attributes = &trigger.attributes;

            let name = attributes
                .name
                .clone()
                .unwrap_or_else(|| format!("Trigger {trigger_id}"));

            let source_type = attributes
                .event_type
                .as_deref()
                .unwrap_or(DEFAULT_SOURCE_EVENT_TYPE);
            let event_type = tables.event_types.translate(Some(source_type));

            let filter = trigger
                .conditions
                .iter()
                .filter_map(|condition| {
                    let filter = translate_condition(condition, tables);
                    if filter.is_none() {
                        debug!("Trigger {source_id:?}: skipping condition {condition:?}");
                    }
                    filter
                })
                .collect();

            id_map.0.insert(source_id.clone(), trigger_id.clone());

            Trigger {
                account_id: identity.account_id.clone(),
                container_id: identity.container_id.clone(),
                trigger_id,
                name,
                event_type: event_type.to_string(),
                filter,
            }
        })
        .collect();

    (translated, id_map)
}

/// `None` for incomplete conditions and operators with no destination match type
fn translate_condition(condition: &SourceCondition, tables: &MappingTables) -> Option<Filter> {
    let variable = non_empty(condition.variable_name.as_deref())?;
    let operator = non_empty(condition.operator.as_deref())?;
    let value = non_empty(condition.value.as_deref())?;

    let match_type = tables.condition_match_type(operator)?;

    Some(Filter {
        filter_type: CONDITION_FILTER_TYPE.to_string(),
        parameter: vec![
            Parameter::template("arg0", variable_reference(variable)),
            Parameter::template("arg1", match_type),
            Parameter::template("arg2", value),
        ],
    })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// `Page URL` -> `{{Page URL}}`
fn variable_reference(name: &str) -> String {
    if name.starts_with("{{") && name.ends_with("}}") {
        name.to_string()
    } else {
        format!("{{{{{name}}}}}")
    }
}
