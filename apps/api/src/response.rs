use serde::Serialize;

/// Success half of the action envelope. Errors render through `AppError`.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T> {
    status: &'static str,
    pub message: String,
    pub data: T,
    /// Set when the request succeeded but the caller should know something
    /// about how, e.g. a fallback data source was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl<T> ActionResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }
}
