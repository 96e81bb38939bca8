//! # Property Tests
//!
//! Generated inputs for every variant: the identity attributes and the
//! attached envelope come back out of the encoded body unchanged and in
//! order. Invalid input never produces a request.

#[cfg(test)]
mod tests {
    use activation_request::{
        ActivationData, ActivationRequest, ActivationVariant, EncryptedEnvelope,
        JsonRequestEncoder, RequestEncoder,
    };
    use proptest::prelude::*;

    fn value() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 .@_-]{0,40}"
    }

    fn key() -> impl Strategy<Value = String> {
        "[a-z][A-Za-z0-9]{0,15}"
    }

    fn envelopes() -> impl Strategy<Value = EncryptedEnvelope> {
        (
            "[A-Za-z0-9+/]{43}=",
            "[A-Za-z0-9+/]{0,96}",
            "[A-Za-z0-9+/]{22}==",
            proptest::option::of("[A-Za-z0-9+/]{32}"),
            proptest::option::of(any::<u64>()),
        )
            .prop_map(
                |(ephemeral_public_key, encrypted_data, mac, nonce, timestamp)| EncryptedEnvelope {
                    ephemeral_public_key,
                    encrypted_data,
                    mac,
                    nonce,
                    timestamp,
                },
            )
    }

    fn sealed(mut request: ActivationRequest, envelope: &EncryptedEnvelope) -> ActivationRequest {
        request.attach_payload(envelope.clone()).unwrap();
        request
    }

    fn roundtrip(request: &ActivationRequest) -> activation_request::ActivationRequestBody {
        let bytes = JsonRequestEncoder::new()
            .encode(&request.serialize().unwrap())
            .unwrap();
        JsonRequestEncoder::new().decode(&bytes).unwrap()
    }

    proptest! {
        #[test]
        fn standard_code_survives_encoding(code in value(), envelope in envelopes()) {
            let body = roundtrip(&sealed(ActivationRequest::standard(&code).unwrap(), &envelope));
            prop_assert_eq!(body.activation_type, ActivationVariant::Standard);
            prop_assert_eq!(&body.activation_data, &envelope);
            prop_assert_eq!(body.identity_attributes.get("code"), Some(code.as_str()));
            prop_assert_eq!(body.identity_attributes.len(), 1);
        }

        #[test]
        fn recovery_pair_survives_encoding(
            code in value(),
            puk in "[0-9]{4,10}",
            envelope in envelopes()
        ) {
            let body = roundtrip(&sealed(ActivationRequest::recovery(&code, &puk).unwrap(), &envelope));
            prop_assert_eq!(body.activation_type, ActivationVariant::Recovery);
            prop_assert_eq!(&body.activation_data, &envelope);
            let keys: Vec<&str> = body.identity_attributes.keys().collect();
            prop_assert_eq!(keys, vec!["recoveryCode", "puk"]);
            prop_assert_eq!(body.identity_attributes.get("puk"), Some(puk.as_str()));
        }

        #[test]
        fn custom_attributes_keep_order_and_values(
            pairs in proptest::collection::btree_map(key(), value(), 1..16),
            envelope in envelopes()
        ) {
            // Reverse so insertion order differs from sorted order
            let pairs: Vec<(String, String)> = pairs.into_iter().rev().collect();
            let request = sealed(ActivationRequest::custom(pairs.clone()).unwrap(), &envelope);
            let body = roundtrip(&request);
            prop_assert_eq!(body.activation_type, ActivationVariant::Custom);
            prop_assert_eq!(&body.activation_data, &envelope);
            prop_assert_eq!(Some(&body.activation_data), request.activation_data());

            let decoded: Vec<(String, String)> = body
                .identity_attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            prop_assert_eq!(decoded, pairs);
        }

        #[test]
        fn blank_values_never_build(blank in "[ \t]{0,8}") {
            prop_assert!(ActivationRequest::standard(&blank).is_err());
            prop_assert!(ActivationRequest::recovery("R-1", &blank).is_err());
            prop_assert!(ActivationRequest::custom([("k", blank.as_str())]).is_err());
        }

        #[test]
        fn control_characters_never_build(
            prefix in value(),
            control in proptest::char::range('\u{0}', '\u{1f}')
        ) {
            let code = format!("{prefix}{control}");
            prop_assert!(ActivationRequest::standard(&code).unwrap_err().is_validation());
        }

        #[test]
        fn unsealed_requests_never_serialize(code in value()) {
            let request = ActivationRequest::standard(&code).unwrap();
            prop_assert!(request.serialize().unwrap_err().is_state());
        }

        #[test]
        fn activation_data_plaintext_roundtrips(
            key in value(),
            name in proptest::option::of(value())
        ) {
            let mut data = ActivationData::new(key.clone()).unwrap();
            if let Some(name) = &name {
                data = data.with_activation_name(name.clone());
            }
            let decoded: ActivationData =
                serde_json::from_slice(&data.to_plaintext().unwrap()).unwrap();
            prop_assert_eq!(decoded.device_public_key(), key.as_str());
            prop_assert_eq!(decoded.activation_name(), name.as_deref());
        }
    }
}
