use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::convert::Converter;

/// Where the converted export is read from
#[derive(Debug, Clone)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl std::str::FromStr for Input {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Input::Stdin),
            _ => Ok(Input::File(PathBuf::from(s))),
        }
    }
}

impl Input {
    fn read(&self) -> Result<Vec<u8>> {
        match self {
            Input::Stdin => read_all(io::stdin().lock()).context("Failed to read stdin"),
            Input::File(path) => {
                fs::read(path).with_context(|| format!("Failed to read file {:?}", path))
            }
        }
    }
}

fn read_all(mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut bytes = vec![];
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Convert a single export. Written to `output_folder` under the configured
/// filename if given, otherwise to stdout.
pub fn convert_file(
    converter: &Converter,
    input: &Input,
    output_folder: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let bytes = input.read()?;

    let artifact = converter
        .convert_bytes(&bytes)
        .context("Input is not a usable container export")?;

    let Some(output_folder) = output_folder else {
        let mut stdout = BufWriter::new(io::stdout().lock());
        stdout
            .write_all(&artifact.bytes)
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;

        return Ok(None);
    };

    fs::create_dir_all(output_folder).context("Failed to create folder")?;
    let out_path = output_folder.join(&artifact.filename);
    fs::write(&out_path, &artifact.bytes)
        .with_context(|| format!("Failed to write file {:?}", out_path))?;

    info!("Wrote {}", out_path.display());

    Ok(Some(out_path))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn writes_into_output_folder() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("piwik.json");
        fs::write(
            &input_path,
            r#"{"triggers": {"t1": {"attributes": {"name": "All pages", "type": "pageview"}}},
                "tags": {"g1": {"attributes": {"code": "<script></script>"}, "triggers": ["t1"]}}}"#,
        )
        .unwrap();
        let output_folder = dir.path().join("out").join("nested");

        let written = convert_file(
            &Converter::default(),
            &Input::File(input_path),
            Some(&output_folder),
        )
        .unwrap();

        let out_path = output_folder.join("converted_gtm.json");
        assert_eq!(written, Some(out_path.clone()));

        let output: Value = serde_json::from_slice(&fs::read(out_path).unwrap()).unwrap();
        assert_eq!(output["containerVersion"]["trigger"][0]["name"], "All pages");
        assert_eq!(output["containerVersion"]["tag"][0]["firingTriggerId"][0], "1");
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("broken.json");
        fs::write(&input_path, "{ nope").unwrap();
        let output_folder = dir.path().join("out");

        let err = convert_file(
            &Converter::default(),
            &Input::File(input_path),
            Some(&output_folder),
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("not valid JSON"));
        assert!(!output_folder.exists());
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_file(
            &Converter::default(),
            &Input::File(dir.path().join("absent.json")),
            Some(dir.path()),
        );

        assert!(result.is_err());
    }

    #[test]
    fn piped_input_converts() {
        let piped: &[u8] = br#"{"tags": {"g1": {"attributes": {"name": "Piped"}}}}"#;
        let bytes = read_all(piped).unwrap();

        let artifact = Converter::default().convert_bytes(&bytes).unwrap();
        let output: Value = serde_json::from_slice(&artifact.bytes).unwrap();
        assert_eq!(output["containerVersion"]["tag"][0]["name"], "Piped");
    }

    #[test]
    fn dash_means_stdin() {
        assert!(matches!("-".parse::<Input>(), Ok(Input::Stdin)));
        assert!(matches!("a.json".parse::<Input>(), Ok(Input::File(p)) if p == Path::new("a.json")));
    }
}
