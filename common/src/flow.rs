//! フロー状態機械
//!
//! 3つの送信フロー共通の状態:
//! Idle -> (検証) -> Submitting -> 決着(成功/失敗) -> Idle。
//! 決着後は必ずIdleに戻り、送信ボタンが再度有効になる。
//!
//! 不変条件: 結果パネルとエラーパネルが同時に見えることはない。

/// 送信中ボタンの文言
pub const BUSY_LABEL: &str = "Processing...";

/// 1フォームぶんのUI状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowState {
    submitting: bool,
    response_visible: bool,
    error: Option<String>,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送信開始。エラーパネルを隠し、ボタンを無効化する
    ///
    /// ボタンは送信中ずっと無効なので、同一フォームの二重送信は起きない
    pub fn begin(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// 成功で決着。結果パネルを表示する
    pub fn settle_ok(&mut self) {
        self.submitting = false;
        self.response_visible = true;
        self.error = None;
    }

    /// 失敗で決着。エラーパネルを表示し、結果パネルは隠す
    pub fn settle_err(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.response_visible = false;
        self.error = Some(message.into());
    }

    /// ローカル検証エラー（送信せずにエラー表示）
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.settle_err(message);
    }

    /// エラーパネルを畳む
    ///
    /// 画像系2フローはエラーパネルを共有するため、片方の送信開始時に
    /// もう片方のエラーも畳む必要がある
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// 送信中か（ボタンのdisabled状態）
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// 結果パネルを表示するか
    pub fn response_visible(&self) -> bool {
        self.response_visible
    }

    /// エラーパネルの文言（Noneなら非表示）
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 送信ボタンの文言
    pub fn button_label<'a>(&self, idle_label: &'a str) -> &'a str {
        if self.submitting {
            BUSY_LABEL
        } else {
            idle_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels_exclusive(state: &FlowState) -> bool {
        !(state.response_visible() && state.error().is_some())
    }

    #[test]
    fn test_initial_state_idle() {
        let state = FlowState::new();
        assert!(!state.is_submitting());
        assert!(!state.response_visible());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_begin_hides_error_and_disables() {
        let mut state = FlowState::new();
        state.show_error("Please enter some text");
        state.begin();
        assert!(state.is_submitting());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_settle_ok_returns_to_idle() {
        let mut state = FlowState::new();
        state.begin();
        state.settle_ok();
        assert!(!state.is_submitting());
        assert!(state.response_visible());
        assert!(panels_exclusive(&state));
    }

    #[test]
    fn test_settle_err_returns_to_idle() {
        let mut state = FlowState::new();
        state.begin();
        state.settle_err("rate limited");
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("rate limited"));
        assert!(panels_exclusive(&state));
    }

    #[test]
    fn test_error_after_success_hides_response() {
        // 成功表示後の再送信が失敗したら結果パネルは消える
        let mut state = FlowState::new();
        state.begin();
        state.settle_ok();
        state.begin();
        state.settle_err("quota exceeded");
        assert!(!state.response_visible());
        assert!(panels_exclusive(&state));
    }

    #[test]
    fn test_button_label() {
        let mut state = FlowState::new();
        assert_eq!(state.button_label("Generate"), "Generate");
        state.begin();
        assert_eq!(state.button_label("Generate"), BUSY_LABEL);
        state.settle_err("x");
        assert_eq!(state.button_label("Generate"), "Generate");
    }

    #[test]
    fn test_dismiss_error() {
        let mut state = FlowState::new();
        state.show_error("Please select an image to analyze");
        state.dismiss_error();
        assert!(state.error().is_none());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_validation_error_without_submit() {
        let mut state = FlowState::new();
        state.show_error("No image selected for processing");
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("No image selected for processing"));
    }
}
