//! wordsolver
//!
//! 文章題の画像 → OCR（tesseract） → Chat Completions API → 解答表示

pub mod answer;
pub mod cli;
pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod ocr;
pub mod record;
pub mod render;
pub mod solver;

pub use solver::ImageSolver;
