use serde::{Deserialize, Serialize};

/// Wrapper the listing backend puts around every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("backend reported failure: {message}")]
    Rejected { message: String },
    #[error("backend response carried no data")]
    MissingData,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected {
                message: self.message,
            });
        }

        self.data.ok_or(EnvelopeError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_successful_payloads() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"message":"ok","data":[1,2]}"#)
                .expect("decodes");
        assert_eq!(envelope.into_data(), Ok(vec![1, 2]));
    }

    #[test]
    fn failures_surface_backend_message() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"No bookings found","data":null}"#)
                .expect("decodes");
        assert_eq!(
            envelope.into_data(),
            Err(EnvelopeError::Rejected {
                message: "No bookings found".to_string()
            })
        );
    }

    #[test]
    fn success_without_data_is_an_error() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":true,"message":""}"#).expect("decodes");
        assert_eq!(envelope.into_data(), Err(EnvelopeError::MissingData));
    }
}
