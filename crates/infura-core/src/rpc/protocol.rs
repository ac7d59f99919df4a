use serde::{Deserialize, Serialize};

use crate::error::InfuraError;

pub(super) const JSONRPC_VERSION: &str = "2.0";

/// Every request carries the same id; calls are strictly one request, one
/// response, so nothing needs to correlate them.
pub(super) const REQUEST_ID: u64 = 1;

#[derive(Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) method: &'a str,
    pub(super) params: &'a serde_json::Value,
    pub(super) id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    pub(super) fn new(method: &'a str, params: &'a serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id: REQUEST_ID,
        }
    }
}

/// Only `result` and `error` are inspected. A `null` error counts as absent.
#[derive(Debug)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Decode a response body. The body must be a single JSON object; arrays and
/// scalars are rejected even when they are valid JSON.
pub(super) fn decode_response(body: &str) -> Result<JsonRpcResponse, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let serde_json::Value::Object(mut fields) = value else {
        return Err(serde::de::Error::custom(
            "JSON-RPC response must be a JSON object",
        ));
    };

    Ok(JsonRpcResponse {
        result: fields.remove("result"),
        error: fields.remove("error").filter(|err| !err.is_null()),
    })
}

/// Turn a populated JSON-RPC `error` value into an [`InfuraError`].
///
/// Errors shaped `{"code": <number>, "message": <string>}` become
/// [`InfuraError::Call`] tagged with the method that was invoked; anything
/// else is reported as [`InfuraError::InvalidResponse`] with the raw JSON.
pub(super) fn parse_jsonrpc_error(method: &str, err: serde_json::Value) -> InfuraError {
    // Codes are kept as JSON numbers so a provider sending `-32000.0` is
    // still reported as a call error.
    #[derive(Deserialize)]
    struct JsonRpcError {
        code: serde_json::Number,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => InfuraError::Call {
            code: parsed.code,
            method: method.to_owned(),
            message: parsed.message,
        },
        Err(_) => InfuraError::InvalidResponse(format!(
            "non-standard JSON-RPC error from {method}: {err}"
        )),
    }
}

/// Short description of the params container for log fields.
pub(super) fn params_kind(params: &serde_json::Value) -> &'static str {
    match params {
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
        serde_json::Value::Null => "null",
        _ => "scalar",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serializes_envelope_fields() {
        let params = json!(["0x6b175474e89094c44da98b954eedeac495271d0f", "latest"]);
        let req = JsonRpcRequest::new("eth_getBalance", &params);
        let encoded = serde_json::to_value(&req).expect("request must serialize");
        assert_eq!(
            encoded,
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBalance",
                "params": ["0x6b175474e89094c44da98b954eedeac495271d0f", "latest"],
                "id": 1
            })
        );
    }

    #[test]
    fn response_treats_null_error_as_absent() {
        let decoded =
            decode_response(r#"{"jsonrpc":"2.0","id":1,"result":"0x1","error":null}"#)
                .expect("response must decode");
        assert!(decoded.error.is_none());
        assert_eq!(decoded.result, Some(json!("0x1")));
    }

    #[test]
    fn response_without_result_decodes() {
        let decoded =
            decode_response(r#"{"jsonrpc":"2.0","id":1}"#).expect("response must decode");
        assert!(decoded.result.is_none());
        assert!(decoded.error.is_none());
    }

    #[test]
    fn array_body_is_rejected() {
        let err =
            decode_response(r#"["0xdead", null]"#).expect_err("array must be rejected");
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn scalar_bodies_are_rejected() {
        for body in ["\"0x10\"", "16", "null", "true"] {
            assert!(decode_response(body).is_err(), "{body} must be rejected");
        }
    }

    #[test]
    fn non_json_body_is_rejected() {
        assert!(decode_response("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn standard_error_maps_to_call_error() {
        let err = parse_jsonrpc_error(
            "eth_call",
            json!({"code": -32000, "message": "execution reverted"}),
        );
        assert!(matches!(
            err,
            InfuraError::Call { ref code, ref method, ref message }
                if code.as_i64() == Some(-32000)
                    && method == "eth_call"
                    && message == "execution reverted"
        ));
    }

    #[test]
    fn error_with_extra_data_still_maps_to_call_error() {
        let err = parse_jsonrpc_error(
            "eth_call",
            json!({"code": 3, "message": "execution reverted", "data": "0x08c379a0"}),
        );
        assert!(matches!(
            err,
            InfuraError::Call { ref code, .. } if code.as_i64() == Some(3)
        ));
    }

    #[test]
    fn float_code_maps_to_call_error() {
        let err = parse_jsonrpc_error("eth_call", json!({"code": -32000.0, "message": "x"}));
        assert!(matches!(err, InfuraError::Call { .. }));
        assert_eq!(
            err.to_string(),
            "Error (-32000.0): Infura API call eth_call gave message: 'x'"
        );
    }

    #[test]
    fn string_code_is_non_standard() {
        let err = parse_jsonrpc_error("eth_call", json!({"code": "-32000", "message": "x"}));
        assert!(matches!(err, InfuraError::InvalidResponse(_)));
    }

    #[test]
    fn non_standard_error_maps_to_invalid_response() {
        let err = parse_jsonrpc_error("eth_chainId", json!("rate limited"));
        match err {
            InfuraError::InvalidResponse(msg) => {
                assert!(msg.contains("eth_chainId"));
                assert!(msg.contains("rate limited"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn params_kind_names_container() {
        assert_eq!(params_kind(&json!([])), "array");
        assert_eq!(params_kind(&json!({})), "object");
        assert_eq!(params_kind(&json!(null)), "null");
        assert_eq!(params_kind(&json!(7)), "scalar");
    }
}
