//! Types for the configuration file usable by svgshape
use std::{
    env::current_dir,
    fs::read_to_string,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use etcetera::{choose_base_strategy, BaseStrategy};
use serde::{Deserialize, Serialize};
use svgshape_document::{ExportOptions, ImportOptions};

#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The config for the CLI usage of svgshape
pub struct Config {
    /// Which shapes are imported, and how
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportOptions>,
    /// How exported documents are written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportOptions>,
}

impl Config {
    fn local_path() -> std::io::Result<PathBuf> {
        Ok(current_dir()?.join("svgshaperc.json"))
    }

    fn base_path() -> Option<PathBuf> {
        let mut path = choose_base_strategy().ok()?.config_dir();
        path.push("svgshape");
        path.push("config.json");
        Some(path)
    }

    /// Reads the configuration at the path, or `None` if there's no such file
    ///
    /// # Errors
    /// When the file can't be read or parsed
    pub fn read(path: &Path) -> anyhow::Result<Option<Self>> {
        let file = match read_to_string(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let config = serde_json::from_str(&file).with_context(|| {
            format!(
                "Configuration at {} cannot be parsed",
                path.to_string_lossy()
            )
        })?;
        log::debug!("loaded configuration from {}", path.to_string_lossy());
        Ok(Some(config))
    }

    /// Tries loading the configuration from well-known paths, falling back to defaults
    ///
    /// # Errors
    /// When a configuration exists but cannot be read or parsed
    pub fn load() -> anyhow::Result<Self> {
        if let Some(config) = Self::read(&Self::local_path()?)? {
            return Ok(config);
        }
        match Self::base_path() {
            Some(path) => Ok(Self::read(&path)?.unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }
}

#[test]
fn serde() -> anyhow::Result<()> {
    use pretty_assertions::assert_eq;
    use svgshape_document::{xmlwriter::Indent, Shapes};

    let config: Config = serde_json::from_str(
        r#"{
        "import": { "shapes": ["path", "rect"], "skipHidden": true },
        "export": { "indent": "tabs" }
    }"#,
    )?;

    assert_eq!(
        config.import,
        Some(ImportOptions {
            shapes: Shapes::PATH | Shapes::RECT,
            skip_hidden: true,
        })
    );
    assert_eq!(
        config.export,
        Some(ExportOptions {
            indent: Indent::Tabs,
            use_single_quote: false,
        })
    );
    assert_eq!(
        serde_json::to_string(&config.import)?,
        r#"{"shapes":["path","rect"],"skipHidden":true}"#
    );
    Ok(())
}

#[test]
fn missing_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("svgshape-missing-config.json");
    assert_eq!(Config::read(&path)?, None);
    Ok(())
}
