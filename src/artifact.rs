use crate::gtm::ContainerExport;

/// A converted export, ready to hand back as a download
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Pretty-printed JSON, two-space indent
    pub bytes: Vec<u8>,
    /// Suggested download name
    pub filename: String,
}

impl Artifact {
    pub const CONTENT_TYPE: &'static str = "application/json";

    pub fn from_export(export: &ContainerExport, filename: &str) -> serde_json::Result<Self> {
        let mut bytes = serde_json::to_vec_pretty(export)?;
        bytes.push(b'\n');

        Ok(Self {
            bytes,
            filename: filename.to_string(),
        })
    }

    /// Value for a `Content-Disposition` header, so clients save rather than render
    pub fn content_disposition(&self) -> String {
        let filename = self.filename.replace(['\\', '"'], "_");
        format!("attachment; filename=\"{filename}\"")
    }
}
