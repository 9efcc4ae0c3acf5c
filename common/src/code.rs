//! 材料コード正規化モジュール
//!
//! 入力された材料コードを `NN.NNN.NNN` 形式に揃える。

/// 正規形の桁数
pub const CANONICAL_DIGITS: usize = 8;

/// ドットを全て除去し、前後の空白を取り除く
///
/// 内部の空白はそのまま残る。
pub fn normalize_code(code: &str) -> String {
    code.replace('.', "").trim().to_string()
}

/// 表示・照合用の正規形に整形
///
/// 正規化後が8桁なら `2-3-3` でドット区切りにする。
/// それ以外は正規化前の入力をそのまま返す（カタログ側の既存値に合わせるため）。
pub fn format_code(code: &str) -> String {
    let digits: Vec<char> = normalize_code(code).chars().collect();
    if digits.len() != CANONICAL_DIGITS {
        return code.to_string();
    }
    let group = |range: std::ops::Range<usize>| digits[range].iter().collect::<String>();
    format!("{}.{}.{}", group(0..2), group(2..5), group(5..8))
}
