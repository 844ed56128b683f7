// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use range_regex_core::domain::WidthPolicy;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "range_regex",
    version = crate::VERSION,
    about = "整数範囲 [MIN, MAX] に一致する正規表現を生成します"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 範囲の下限（含む）
    #[arg(allow_negative_numbers = true)]
    pub min: i64,

    /// 範囲の上限（含む）
    #[arg(allow_negative_numbers = true)]
    pub max: i64,

    /// 桁幅の決め方: padded（上限の桁数でゼロ埋め）, natural（ゼロ埋めなし）, または固定幅 N
    #[arg(long, help_heading = "生成")]
    pub width: Option<WidthPolicy>,

    /// MIN > MAX のときエラーにせず空グループ `()` を出力
    #[arg(long, help_heading = "生成")]
    pub allow_empty: bool,

    /// 非キャプチャグループ `(?:...)` を使用
    #[arg(long, help_heading = "生成")]
    pub non_capturing: bool,

    /// パターン全体を `^...$` で囲む
    #[arg(long, help_heading = "生成")]
    pub anchored: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, help_heading = "出力")]
    pub format: Option<CliOutputFormat>,

    /// 部分範囲ごとの断片も表示
    #[arg(long, help_heading = "出力")]
    pub explain: bool,

    /// 出力前に regex エンジンで検証
    #[arg(long, help_heading = "検証")]
    pub check: bool,

    /// 検証で調べる値の上限（超える場合は境界値のみ）
    #[arg(long, requires = "check", help_heading = "検証")]
    pub check_limit: Option<u64>,

    /// 既定値を読み込む設定ファイル (YAML / JSON)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "設定")]
    pub config: Option<PathBuf>,

    /// ログを詳細に出力（-vv でさらに詳細）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "ログ")]
    pub quiet: bool,
}
