//! 画像加工エフェクトの種類
//!
//! `/process-image` のoperationフィールドに載せる値。
//! サーバー側のディスパッチと一致させること。

/// エフェクト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectKind {
    #[default]
    Blur,
    Pixelate,
    Contrast,
    Brighten,
    Darken,
    Noise,
}

impl EffectKind {
    /// セレクトボックスの表示順
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Blur,
        EffectKind::Pixelate,
        EffectKind::Contrast,
        EffectKind::Brighten,
        EffectKind::Darken,
        EffectKind::Noise,
    ];

    /// ワイヤ値（operationフィールド）
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Blur => "blur",
            EffectKind::Pixelate => "pixelate",
            EffectKind::Contrast => "contrast",
            EffectKind::Brighten => "brighten",
            EffectKind::Darken => "darken",
            EffectKind::Noise => "noise",
        }
    }

    /// UI表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::Blur => "Blur",
            EffectKind::Pixelate => "Pixelate",
            EffectKind::Contrast => "Contrast",
            EffectKind::Brighten => "Brighten",
            EffectKind::Darken => "Darken",
            EffectKind::Noise => "Noise",
        }
    }

    /// ワイヤ値からの変換。未知の値はデフォルト(blur)に落とす
    pub fn parse(value: &str) -> EffectKind {
        EffectKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blur() {
        assert_eq!(EffectKind::default(), EffectKind::Blur);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(EffectKind::Blur.as_str(), "blur");
        assert_eq!(EffectKind::Pixelate.as_str(), "pixelate");
        assert_eq!(EffectKind::Noise.as_str(), "noise");
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in EffectKind::ALL {
            assert_eq!(EffectKind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(EffectKind::parse("sepia"), EffectKind::Blur);
        assert_eq!(EffectKind::parse(""), EffectKind::Blur);
    }
}
