//! Uniform response envelope for the `/post` resource

use serde::Serialize;

use super::{Created, Post};

/// Outcome reported in the `Status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// Route-specific payload carried in `Data`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Posts(Vec<Post>),
    Created(Created),
}

/// `{"Status", "Message", "Data"}` wrapper.
///
/// All three keys are always present; `Data` is `null` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Data")]
    pub data: Option<Payload>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: Payload) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fail_has_null_data() {
        let value = serde_json::to_value(Envelope::fail("nope")).unwrap();
        assert_eq!(
            value,
            json!({ "Status": "fail", "Message": "nope", "Data": null })
        );
    }

    #[test]
    fn empty_listing_is_an_array() {
        let value =
            serde_json::to_value(Envelope::success("ok", Payload::Posts(vec![]))).unwrap();
        assert_eq!(value["Status"], "success");
        assert_eq!(value["Data"], json!([]));
    }
}
