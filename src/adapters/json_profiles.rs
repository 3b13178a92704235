//! Profile persistence as JSON files.
//!
//! One `<name>.json` file per profile inside a single directory. Names are
//! sanitized before they touch the filesystem.

use std::path::{Path, PathBuf};

use crate::domain::{EncoderProfile, LineCodeError, LineCodeResult};
use crate::ports::ProfileRepository;

/// Name of the profile that always exists and cannot be deleted
pub const DEFAULT_PROFILE: &str = "Default";

/// Check a profile name before it becomes a file name.
///
/// Surrounding whitespace is trimmed. The result may only hold letters,
/// digits, spaces, '-' and '_', which also rules out separators and "..".
fn profile_file_stem(name: &str) -> LineCodeResult<String> {
    let stem = name.trim();
    if stem.is_empty() {
        return Err(LineCodeError::InvalidProfileName(
            "profile name is blank".to_string(),
        ));
    }
    if let Some(bad) = stem
        .chars()
        .find(|&c| !(c.is_alphanumeric() || matches!(c, ' ' | '-' | '_')))
    {
        return Err(LineCodeError::InvalidProfileName(format!(
            "'{stem}' contains '{bad}'; profile names use letters, digits, spaces, '-' and '_'"
        )));
    }
    Ok(stem.to_string())
}

pub struct JsonProfileStore {
    dir: PathBuf,
}

impl JsonProfileStore {
    /// Use `dir` for profile files, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> LineCodeResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl ProfileRepository for JsonProfileStore {
    fn save(&self, profile: &EncoderProfile) -> LineCodeResult<()> {
        let name = profile_file_stem(&profile.name)?;
        profile.validate()?;
        let json = serde_json::to_string_pretty(profile)?;
        std::fs::write(self.path_for(&name), json)?;
        log::info!("saved profile '{name}'");
        Ok(())
    }

    fn load(&self, name: &str) -> LineCodeResult<EncoderProfile> {
        let name = profile_file_stem(name)?;
        let path = self.path_for(&name);
        if !path.exists() {
            if name == DEFAULT_PROFILE {
                return Ok(EncoderProfile::default());
            }
            return Err(LineCodeError::ProfileNotFound(name));
        }
        let json = std::fs::read_to_string(&path)?;
        let profile: EncoderProfile = serde_json::from_str(&json)
            .map_err(|e| LineCodeError::Profile(format!("failed to parse '{name}': {e}")))?;
        Ok(profile)
    }

    fn list(&self) -> LineCodeResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> LineCodeResult<()> {
        let name = profile_file_stem(name)?;
        if name == DEFAULT_PROFILE {
            return Err(LineCodeError::Profile(
                "cannot delete the Default profile".to_string(),
            ));
        }
        let path = self.path_for(&name);
        if !path.exists() {
            return Err(LineCodeError::ProfileNotFound(name));
        }
        std::fs::remove_file(&path)?;
        log::info!("deleted profile '{name}'");
        Ok(())
    }
}
