//! Result payload of a form action.

use serde::{Deserialize, Serialize};

/// What a form action hands back to the page (or JSON caller).
///
/// Serializes to exactly one of `{message}`, `{errorMessage, errorDetail?}`
/// or `{url, token, mailAddress}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionData {
    /// The action succeeded.
    Message { message: String },

    /// The action failed in a way the merchant can act on.
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
        #[serde(rename = "errorDetail", skip_serializing_if = "Option::is_none")]
        error_detail: Option<String>,
    },

    /// A multipass login URL was generated.
    LoginUrl {
        url: String,
        token: String,
        #[serde(rename = "mailAddress")]
        mail_address: String,
    },
}

impl ActionData {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(error_message: impl Into<String>, error_detail: Option<String>) -> Self {
        Self::Error {
            error_message: error_message.into(),
            error_detail,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_message_json() {
        let json = serde_json::to_value(ActionData::message("done")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "done" }));
    }

    #[test]
    fn test_error_json_omits_missing_detail() {
        let json = serde_json::to_value(ActionData::error("failed", None)).unwrap();
        assert_eq!(json, serde_json::json!({ "errorMessage": "failed" }));

        let json =
            serde_json::to_value(ActionData::error("failed", Some("why".to_string()))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "errorMessage": "failed", "errorDetail": "why" })
        );
    }

    #[test]
    fn test_login_url_json() {
        let data = ActionData::LoginUrl {
            url: "https://shop.myshopify.com/account/login/multipass/abc=".to_string(),
            token: "abc=".to_string(),
            mail_address: "a@example.com".to_string(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["mailAddress"], "a@example.com");
        assert_eq!(json["token"], "abc=");

        let back: ActionData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
