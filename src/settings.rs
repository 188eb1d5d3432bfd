//! 辞書設定の読み込みと検証を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale;

/// 設定ファイル名
const SETTINGS_FILE_NAME: &str = ".i18n.json";

/// 個別フィールドの検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locale")
    pub field_path: String,
    /// 人間向けのエラーメッセージ
    pub message: String,
}

impl ValidationError {
    /// 検証エラーを作成
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// 設定の読み込み・検証エラー
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 検証エラーの一覧
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// ファイル読み込みエラー
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON パースエラー
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// 検証エラーを番号付きで整形する
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 辞書構築に使う設定
///
/// 要求ロケールは明示的な設定値として渡す。プロセス全体で共有される
/// 可変なデフォルトロケールは持たない。
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionarySettings {
    /// 要求するロケール（例: "en_US"）
    pub locale: String,

    /// 翻訳ファイルのルートディレクトリ
    pub translations_dir: PathBuf,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self { locale: "en".to_string(), translations_dir: PathBuf::from("translations") }
    }
}

impl DictionarySettings {
    /// # Errors
    /// - ロケールの文法が不正
    /// - 翻訳ディレクトリが空
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if locale::fallback_chain(&self.locale).is_err() {
            errors.push(ValidationError::new(
                "locale",
                format!(
                    "Invalid locale tag '{}'. Expected \"xx\" or \"xx_YY\", for example: \"en_US\"",
                    self.locale
                ),
            ));
        }

        if self.translations_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "translationsDir",
                "The directory cannot be empty. Example: \"translations\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// ディレクトリから設定を読み込む
///
/// `.i18n.json` ファイルを探して読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(SettingsError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_from_dir(dir: &Path) -> Result<Option<DictionarySettings>, SettingsError> {
    let config_path = dir.join(SETTINGS_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: DictionarySettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
