//! # Logging Tests
//!
//! Captures JSON log output while building and sealing requests. Field
//! names match the ones `activation-telemetry` documents, and attribute
//! values never show up in the output.

#[cfg(test)]
mod tests {
    use activation_request::{
        ActivationConfig, ActivationData, ActivationRequestApi, ActivationRequestService,
        JsonRequestEncoder, MockEnvelopeEncryptor,
    };
    use parking_lot::Mutex;
    use serde_json::Value;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a JSON subscriber and return one parsed value per line.
    fn capture<F: FnOnce()>(f: F) -> (String, Vec<Value>) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let raw = String::from_utf8(captured.0.lock().clone()).unwrap();
        let lines = raw
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (raw, lines)
    }

    fn event<'a>(lines: &'a [Value], message: &str) -> &'a Value {
        lines
            .iter()
            .find(|v| v["fields"]["message"] == message)
            .unwrap_or_else(|| panic!("no event {message:?}"))
    }

    #[test]
    fn test_lifecycle_events_carry_documented_fields() {
        let service = ActivationRequestService::new(
            ActivationConfig::default(),
            MockEnvelopeEncryptor::default(),
            JsonRequestEncoder,
        )
        .unwrap();

        let (raw, lines) = capture(|| {
            let data = ActivationData::new("DEVICE-KEY")
                .unwrap()
                .with_activation_otp("OTP-SECRET-77");
            let mut request = service
                .create_recovery("RECOVERY-SECRET-1", "PUK-SECRET-2")
                .unwrap();
            service.seal(&mut request, &data).unwrap();
            assert!(service.seal(&mut request, &data).is_err());
            service.encode(&request).unwrap();
        });

        let built = event(&lines, "[activation] Request built");
        assert_eq!(built["fields"]["variant"], "RECOVERY");
        assert_eq!(built["fields"]["attributes"], 2);

        let encrypted = event(&lines, "[activation] Activation data encrypted");
        assert!(encrypted["fields"]["plaintext_len"].is_u64());

        let encoded = event(&lines, "[activation] Encoded request body");
        assert!(encoded["fields"]["bytes"].is_u64());

        assert_eq!(event(&lines, "[activation] Request sealed")["level"], "INFO");
        assert_eq!(
            event(&lines, "[activation] Seal on sealed request")["level"],
            "WARN"
        );

        for secret in ["RECOVERY-SECRET-1", "PUK-SECRET-2", "OTP-SECRET-77"] {
            assert!(!raw.contains(secret), "{secret} leaked into logs");
        }
    }
}
