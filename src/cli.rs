use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "material-lookup")]
#[command(about = "材料コード検索・写真表示・参考資料ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// アセットのルートフォルダ（設定より優先）
    #[arg(long, global = true)]
    pub assets: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// コードでカタログを検索
    Search {
        /// 材料コード
        #[arg(required = true)]
        code: String,
    },

    /// コードに対応する写真を一覧
    Photos {
        #[arg(required = true)]
        code: String,
    },

    /// 追加情報から参考資料を判定
    Docs {
        #[arg(required = true)]
        code: String,

        /// 既定アプリで資料を開く
        #[arg(long)]
        open: bool,
    },

    /// 検索・写真・資料判定を一括実行
    Lookup {
        #[arg(required = true)]
        code: String,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に検索
    Interactive,

    /// ExcelからカタログJSONを生成
    Import {
        /// 入力Excelファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSON（デフォルト: アセットフォルダ/modelo.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// シート名（省略時は先頭シート）
        #[arg(short, long)]
        sheet: Option<String>,

        /// 既存の出力ファイルを上書きする
        #[arg(long)]
        force: bool,
    },

    /// 設定を表示/編集
    Config {
        /// アセットのルートフォルダを設定
        #[arg(long)]
        set_assets: Option<PathBuf>,

        /// 資料パスを設定（例: --set-document haste App_ptro/Haste.pdf）
        #[arg(long, num_args = 2, value_names = ["KIND", "PATH"])]
        set_document: Option<Vec<String>>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 設定対象の資料
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentSlot {
    Haste,
    Tubo,
    Default,
}

impl std::str::FromStr for DocumentSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "haste" => Ok(DocumentSlot::Haste),
            "tubo" => Ok(DocumentSlot::Tubo),
            "default" | "padrao" | "padrão" => Ok(DocumentSlot::Default),
            _ => Err(format!("Unknown document: {}. Use haste, tubo, or default", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_slot_from_str() {
        assert_eq!("Haste".parse::<DocumentSlot>(), Ok(DocumentSlot::Haste));
        assert_eq!("tubo".parse::<DocumentSlot>(), Ok(DocumentSlot::Tubo));
        assert_eq!("padrão".parse::<DocumentSlot>(), Ok(DocumentSlot::Default));
        assert!("pdf".parse::<DocumentSlot>().is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["material-lookup", "search", "12345678", "-v", "--assets", "/srv"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.assets, Some(PathBuf::from("/srv")));
        assert!(matches!(cli.command, Commands::Search { ref code } if code == "12345678"));
    }

    #[test]
    fn test_parse_set_document() {
        let cli = Cli::try_parse_from([
            "material-lookup",
            "config",
            "--set-document",
            "tubo",
            "docs/Tubo.pdf",
        ])
        .unwrap();
        match cli.command {
            Commands::Config { set_document, .. } => {
                assert_eq!(set_document, Some(vec!["tubo".to_string(), "docs/Tubo.pdf".to_string()]));
            }
            _ => panic!("expected config command"),
        }
    }
}
