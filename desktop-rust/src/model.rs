use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub code_input: String,
    /// 直近に検索したコード（入力欄の編集では変わらない）
    pub searched_code: Option<String>,
    pub description: String,
    pub additional: String,
    pub photos: Vec<PathBuf>,
    pub status: String,
}

impl AppState {
    pub fn apply_search(
        &mut self,
        code: String,
        description: String,
        additional: String,
        photos: Vec<PathBuf>,
    ) {
        self.searched_code = Some(code);
        self.description = description;
        self.additional = additional;
        self.photos = photos;
        self.status.clear();
    }

    pub fn searched(&self) -> bool {
        self.searched_code.is_some()
    }

    /// 表示中の結果が入力欄のコードと食い違っていれば再検索が必要
    pub fn needs_search(&self) -> bool {
        self.searched_code.as_deref() != Some(self.code_input.as_str())
    }

    /// 結果欄に表示する文字列
    pub fn result_text(&self) -> String {
        if !self.searched() {
            return String::new();
        }
        format!("Descrição: {}\nAdicionais: {}", self.description, self.additional)
    }
}
