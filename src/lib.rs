//! 材料コード検索ツール
//!
//! 共通ライブラリの検索処理に、CLI・Excel取り込み・ログ初期化を加える。

pub mod cli;
pub mod error;
pub mod import;
pub mod logging;
pub mod report;
