//! 端末描画
//!
//! `UiState` の変化を受けて、画像行・スピナー・エラーバナー・回答パネルを出力する。

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use wordsolver_common::{UiState, View};

const PREVIEW_CHARS: usize = 48;

#[derive(Default)]
pub struct Renderer {
    spinner: Option<ProgressBar>,
    loading: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, state: &UiState) {
        let was_loading = self.loading;
        let lines = self.transition_lines(&state.view());

        if self.loading && !was_loading {
            print_lines(&lines);
            self.spinner = Some(start_spinner());
        } else if !self.loading && was_loading {
            if let Some(bar) = self.spinner.take() {
                bar.finish_and_clear();
            }
            print_lines(&lines);
        }
    }

    /// 状態遷移ごとに出力する行
    ///
    /// - 投稿開始（loading: false → true）: 画像行（同じ画像でも毎回）
    /// - 投稿終了（loading: true → false）: エラーバナーまたは回答パネル
    pub fn transition_lines(&mut self, view: &View<'_>) -> Vec<String> {
        let was_loading = std::mem::replace(&mut self.loading, view.spinner);
        match (was_loading, view.spinner) {
            (false, true) => view
                .image_src
                .map(|src| vec![format!("🖼  {}", preview_data_url(src))])
                .unwrap_or_default(),
            (true, false) => render_panels(view),
            _ => Vec::new(),
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn start_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("solving...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Data URLの先頭だけを表示用に切り出す
pub fn preview_data_url(data_url: &str) -> String {
    if data_url.chars().count() <= PREVIEW_CHARS {
        return data_url.to_string();
    }
    let head: String = data_url.chars().take(PREVIEW_CHARS).collect();
    format!("{}… ({} chars)", head, data_url.len())
}

/// エラーバナー・回答パネルの行
///
/// どちらも表示しない場合は空
pub fn render_panels(view: &View<'_>) -> Vec<String> {
    if let Some(error) = view.error_banner {
        return vec![format!("❌ {}", error)];
    }
    if let Some(answer) = view.answer_panel {
        return vec!["response:".to_string(), answer.to_string()];
    }
    Vec::new()
}
