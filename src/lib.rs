//! i18n-dictionary
//!
//! ロケールを考慮した翻訳文字列検索ライブラリ。要求ロケールの
//! フォールバックチェーンに沿って翻訳を検索し、見つからない場合は
//! 元の文字列をそのまま返す。

pub mod dictionary;
pub mod error;
pub mod key;
mod loader;
pub mod locale;
pub mod settings;
mod store;

// Dictionary を再エクスポート
pub use dictionary::Dictionary;
pub use error::DictionaryError;
pub use key::SourceKey;
pub use settings::{
    DictionarySettings,
    SettingsError,
    ValidationError,
};
