//! プロンプト生成モジュール
//!
//! 回答生成リクエストに付与する固定の指示文と、OCRの言語設定

/// 電卓として振る舞わせる固定の指示文（OCRテキストの前に付与）
pub const ANSWER_INSTRUCTION: &str = "You are a calculator that can solve any math problem. \
Only include the answer in your response. Include mathematical units. \
Type your response all lowercase letters please. Prompt: ";

/// OCRの認識言語（tesseractの言語コード）
pub const OCR_LANGUAGE: &str = "eng";

/// OCRテキストから回答生成用プロンプトを組み立てる
///
/// テキストは加工せず、指示文の末尾にそのまま連結する
pub fn build_answer_prompt(extracted_text: &str) -> String {
    format!("{}{}", ANSWER_INSTRUCTION, extracted_text)
}
