//! エフェクト強度スライダーの表示計算

/// スライダー下限
pub const STRENGTH_MIN: f64 = 0.0;
/// スライダー上限
pub const STRENGTH_MAX: f64 = 1.0;
/// デフォルト強度
pub const STRENGTH_DEFAULT: f64 = 0.5;

/// 生のスライダー値をパーセント表示文字列にする
///
/// 表示則: round(v × 100) + "%"
pub fn strength_percent(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}
