use serde::{Deserialize, Serialize};

/// Optional failure body returned by the backend on mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
}

impl ErrorBody {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: Some(mensagem.into()),
        }
    }

    /// Reason for a non-2xx response: the server's `mensagem` when the body
    /// carries one, otherwise a message derived from the status code.
    pub fn reason(status: u16, body: &[u8]) -> String {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.mensagem)
            .filter(|mensagem| !mensagem.trim().is_empty())
            .unwrap_or_else(|| status_message(status))
    }
}

pub fn status_message(status: u16) -> String {
    format!("Erro HTTP: {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message() {
        assert_eq!(ErrorBody::reason(500, br#"{"mensagem":"em uso"}"#), "em uso");
    }

    #[test]
    fn falls_back_to_status_for_foreign_bodies() {
        assert_eq!(ErrorBody::reason(404, b"<html>not found</html>"), "Erro HTTP: 404");
        assert_eq!(ErrorBody::reason(400, br#"{"error":"bad"}"#), "Erro HTTP: 400");
        assert_eq!(ErrorBody::reason(409, br#"{"mensagem":""}"#), "Erro HTTP: 409");
        assert_eq!(ErrorBody::reason(502, b""), "Erro HTTP: 502");
    }
}
