use super::identity::Identity;
use crate::{
    file_parsers::piwik::types::SourceVariable,
    gtm::{BuiltInVariable, Parameter, Variable, BUILT_IN_VARIABLES, CONSTANT_VARIABLE_TYPE},
};

/// Source name/value pairs become constant variables, numbered 1..
pub fn translate_variables(variables: &[SourceVariable], identity: &Identity) -> Vec<Variable> {
    variables
        .iter()
        .enumerate()
        .map(|(index, variable)| {
            let variable_id = (index + 1).to_string();
            let name = variable
                .name
                .clone()
                .unwrap_or_else(|| format!("Variable {variable_id}"));
            let value = variable.value.clone().unwrap_or_default();

            Variable {
                account_id: identity.account_id.clone(),
                container_id: identity.container_id.clone(),
                variable_id,
                name,
                variable_type: CONSTANT_VARIABLE_TYPE.to_string(),
                parameter: vec![Parameter::template("value", value)],
            }
        })
        .collect()
}

pub fn built_in_variables(identity: &Identity) -> Vec<BuiltInVariable> {
    BUILT_IN_VARIABLES
        .iter()
        .map(|(variable_type, name)| BuiltInVariable {
            account_id: identity.account_id.clone(),
            container_id: identity.container_id.clone(),
            variable_type: variable_type.to_string(),
            name: name.to_string(),
        })
        .collect()
}
