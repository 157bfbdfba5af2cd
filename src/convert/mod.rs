//! Piwik PRO container export -> Google Tag Manager container export
//!
//! The conversion runs in fixed stages: identity resolution, trigger
//! translation (which also builds the trigger ID map), tag translation (which
//! consumes it), variable translation and finally envelope assembly. Shape
//! problems inside the source are repaired with defaults as they're met, only
//! unreadable bytes are an error.
pub mod envelope;
pub mod identity;
pub mod tags;
pub mod triggers;
pub mod variables;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    artifact::Artifact,
    config::{Config, ContainerSettings},
    error::{ConvertError, IntakeError},
    file_parsers::{
        piwik::{types::SourceDocument, PiwikParser},
        FileParser,
    },
    gtm::ContainerExport,
    tables::MappingTables,
};

use envelope::assemble;
use identity::resolve_identity;
use tags::translate_tags;
use triggers::translate_triggers;
use variables::translate_variables;

/// Stateless once built, one per process is enough
#[derive(Debug, Clone, Default)]
pub struct Converter {
    tables: MappingTables,
    settings: ContainerSettings,
}

impl Converter {
    pub fn new(tables: MappingTables, settings: ContainerSettings) -> Self {
        Self { tables, settings }
    }

    pub fn from_config(config: Config) -> Self {
        Self::new(config.tables, config.container)
    }

    pub fn tables(&self) -> &MappingTables {
        &self.tables
    }

    /// Convert, stamping the export with the current time
    pub fn convert(&self, source: &SourceDocument) -> ContainerExport {
        self.convert_at(source, Utc::now())
    }

    pub fn convert_at(&self, source: &SourceDocument, export_time: DateTime<Utc>) -> ContainerExport {
        let identity = resolve_identity(source);
        let (triggers, id_map) = translate_triggers(&source.triggers, &identity, &self.tables);
        let tags = translate_tags(&source.tags, &identity, &id_map, &self.tables);
        let variables = translate_variables(&source.variables, &identity);

        info!(
            account_id = %identity.account_id,
            container_id = %identity.container_id,
            "Converted {} triggers, {} tags, {} variables",
            triggers.len(),
            tags.len(),
            variables.len()
        );

        assemble(
            &identity,
            triggers,
            tags,
            variables,
            &self.settings,
            export_time,
        )
    }

    /// Uploaded bytes in, downloadable export out
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<Artifact, ConvertError> {
        let source = PiwikParser.parse(bytes)?;
        let export = self.convert(&source);

        let artifact = Artifact::from_export(&export, &self.settings.export_filename)
            .map_err(ConvertError::Serialize)?;

        Ok(artifact)
    }
}
