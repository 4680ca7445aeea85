use crate::error::{Result, WordSolverError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wordsolver_common::{DEFAULT_MODEL, OCR_LANGUAGE};

/// APIキーを読む環境変数
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub tesseract_command: String,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            tesseract_command: "tesseract".into(),
            language: OCR_LANGUAGE.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WordSolverError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("wordsolver").join("config.json"))
    }

    /// APIキーを取得（環境変数を優先）
    pub fn get_api_key(&self) -> Result<String> {
        Self::resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    fn resolve_api_key(env_value: Option<String>, stored: Option<&str>) -> Result<String> {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            return Ok(key);
        }

        stored
            .filter(|k| !k.trim().is_empty())
            .map(str::to_string)
            .ok_or(WordSolverError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    /// 表示用に伏せたAPIキー（末尾4文字のみ、4文字以下は全て伏せる）
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                return "****".to_string();
            }
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("****{}", tail)
        })
    }
}
