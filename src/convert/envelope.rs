use chrono::{DateTime, Utc};

use super::{identity::Identity, variables::built_in_variables};
use crate::{
    config::ContainerSettings,
    gtm::{
        Container, ContainerExport, ContainerVersion, Tag, Trigger, Variable,
        CONTAINER_VERSION_ID, EXPORT_FORMAT_VERSION,
    },
};

pub const EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wrap the translated objects in the export envelope
pub fn assemble(
    identity: &Identity,
    triggers: Vec<Trigger>,
    tags: Vec<Tag>,
    variables: Vec<Variable>,
    settings: &ContainerSettings,
    export_time: DateTime<Utc>,
) -> ContainerExport {
    let container = Container {
        path: identity.container_path(),
        account_id: identity.account_id.clone(),
        container_id: identity.container_id.clone(),
        name: settings.name.clone(),
        public_id: settings.public_id.clone(),
        usage_context: settings.usage_context.clone(),
    };

    ContainerExport {
        export_format_version: EXPORT_FORMAT_VERSION,
        export_time: export_time.format(EXPORT_TIME_FORMAT).to_string(),
        container_version: ContainerVersion {
            path: identity.version_path(CONTAINER_VERSION_ID),
            account_id: identity.account_id.clone(),
            container_id: identity.container_id.clone(),
            container_version_id: CONTAINER_VERSION_ID.to_string(),
            container,
            tag: tags,
            trigger: triggers,
            variable: variables,
            built_in_variable: built_in_variables(identity),
            folder: vec![],
        },
    }
}
