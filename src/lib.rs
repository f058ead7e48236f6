//! ini-translator
//!
//! ロケールごとの ini リソースを読み込み、メッセージテンプレート中の
//! `%key%` (翻訳トークン) と `{%name}` (パラメータトークン) を置換する
//! 翻訳ライブラリ

pub mod config;
pub mod error;
pub mod holder;
pub mod host;
pub mod language;
pub mod loader;
pub mod locale;
pub mod resource;
pub mod translator;

pub use config::HostConfig;
pub use error::ResourceError;
pub use holder::TranslatorHolder;
pub use host::{
    HostEnv,
    LocaleReporter,
    StaticEnv,
};
pub use language::Language;
pub use translator::Translator;
