//! JSON envelopes: `{"result": ...}` and `{"error": ...}`.

use serde::Serialize;

use super::SendError;

#[derive(Serialize)]
struct Success<'a, T: ?Sized> {
    result: &'a T,
}

#[derive(Serialize)]
struct Failure<'a> {
    error: &'a str,
}

/// Encode `value` inside a `result` envelope.
pub(super) fn result<T>(value: &T) -> Result<Vec<u8>, SendError>
where
    T: Serialize + ?Sized,
{
    encode(&Success { result: value })
}

/// Encode `message` inside an `error` envelope.
pub(super) fn error(message: &str) -> Result<Vec<u8>, SendError> {
    encode(&Failure { error: message })
}

fn encode<E: Serialize>(envelope: &E) -> Result<Vec<u8>, SendError> {
    Ok(serde_json::to_vec(envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_result_envelope_shape() {
        let bytes = result(&[1, 2, 3]).unwrap();
        assert_eq!(bytes, br#"{"result":[1,2,3]}"#);
    }

    #[test]
    fn test_error_envelope_escapes_message() {
        let bytes = error("bad \"input\"").unwrap();
        assert_eq!(bytes, br#"{"error":"bad \"input\""}"#);
    }

    #[test]
    fn test_non_string_keys_fail() {
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), "pair");
        assert!(matches!(result(&map), Err(SendError::Encoding(_))));
    }
}
