//! Unit tests for the request envelope builder

#[cfg(test)]
mod tests {
    use crate::session::Session;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_first_id_is_one() {
        let mut session = Session::new();
        assert_eq!(session.peek_next_id(), 1);
        assert_eq!(session.issued(), 0);

        let request = session.request("initialize", None);
        assert_eq!(request.id, 1);
        assert_eq!(request.jsonrpc, "2.0");
        assert_eq!(session.peek_next_id(), 2);
        assert_eq!(session.issued(), 1);
    }

    #[test]
    fn test_params_present_only_when_supplied() {
        let mut session = Session::new();

        let without = session.request("tools/list", None);
        assert!(without.params.is_none());

        let null = session.request("tools/list", Some(serde_json::Value::Null));
        assert!(null.params.is_none());

        let with = session.request("tools/call", Some(json!({"name": "getCurrentTime"})));
        assert_eq!(with.params, Some(json!({"name": "getCurrentTime"})));
    }

    #[test]
    fn test_encode_shape() {
        let mut session = Session::new();
        let request = session.request("tools/list", None);
        assert_eq!(
            Session::encode(&request).unwrap(),
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#
        );
    }

    #[test]
    fn test_decode_does_not_validate_shape() {
        let response = Session::decode(r#"{"unexpected": true}"#).unwrap();
        assert!(response.result.is_none());
        assert!(response.error.is_none());

        let response = Session::decode(
            r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32700,"message":"Parse error"}}"#,
        )
        .unwrap();
        assert_eq!(response.error.unwrap().message, "Parse error");
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(Session::decode("Error: expected 1 argument (request JSON string)").is_err());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::new();
        let mut second = Session::new();
        first.request("a", None);
        first.request("b", None);
        assert_eq!(second.request("c", None).id, 1);
        assert_eq!(first.request("d", None).id, 3);
    }

    proptest! {
        #[test]
        fn prop_ids_are_one_through_n(methods in proptest::collection::vec("[a-z/]{1,16}", 0..64)) {
            let mut session = Session::new();
            let ids: Vec<u64> = methods
                .iter()
                .map(|method| session.request(method.as_str(), None).id)
                .collect();
            let expected: Vec<u64> = (1..=methods.len() as u64).collect();
            prop_assert_eq!(ids, expected);
        }

        #[test]
        fn prop_encode_decode_round_trip(
            method in "[a-zA-Z/_]{1,24}",
            key in "[a-z]{1,8}",
            value in any::<i64>(),
            with_params in any::<bool>(),
            skip in 0usize..16,
        ) {
            let mut session = Session::new();
            for _ in 0..skip {
                session.request("ping", None);
            }
            let params = with_params.then(|| json!({ key: value }));
            let request = session.request(method.clone(), params.clone());

            let text = Session::encode(&request).unwrap();
            let parsed: webmcp_protocol::Request = serde_json::from_str(&text).unwrap();

            prop_assert_eq!(parsed.method, method);
            prop_assert_eq!(parsed.id, skip as u64 + 1);
            prop_assert_eq!(parsed.params, params);
        }
    }
}
