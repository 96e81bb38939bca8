//! # Concurrency Tests
//!
//! A request is owned by one thread at a time. Sharing goes through a
//! `parking_lot::Mutex`; whichever thread locks first seals it, everyone
//! else sees `StateError::AlreadySealed`.

#[cfg(test)]
mod tests {
    use activation_crypto::EciesDecryptor;
    use activation_request::{
        ActivationConfig, ActivationData, ActivationError, ActivationRequest,
        ActivationRequestApi, ActivationRequestService, JsonRequestEncoder, StateError,
    };
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::thread;

    const THREADS: usize = 16;

    #[test]
    fn test_concurrent_seal_has_single_winner() {
        let server = EciesDecryptor::generate_for_activation();
        let service = Arc::new(
            ActivationRequestService::new(
                ActivationConfig::default(),
                server.encryptor(),
                JsonRequestEncoder,
            )
            .unwrap(),
        );
        let request = Arc::new(Mutex::new(
            service.create_standard("ABC-123").unwrap(),
        ));

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let service = Arc::clone(&service);
                let request = Arc::clone(&request);
                thread::spawn(move || {
                    let data = ActivationData::new(format!("device-key-{i}")).unwrap();
                    let mut guard = request.lock();
                    service.seal(&mut guard, &data).map(|_| i)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners: Vec<usize> = results.iter().filter_map(|r| r.clone().ok()).collect();
        assert_eq!(winners.len(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.clone().err())
            .all(|e| e == ActivationError::State(StateError::AlreadySealed)));

        // The stored envelope belongs to the winner
        let guard = request.lock();
        let plaintext = server.open(guard.activation_data().unwrap()).unwrap();
        let data: ActivationData = serde_json::from_slice(&plaintext).unwrap();
        assert_eq!(data.device_public_key(), format!("device-key-{}", winners[0]));
    }

    #[test]
    fn test_independent_requests_seal_in_parallel() {
        let server = Arc::new(EciesDecryptor::generate_for_activation());
        let service = Arc::new(
            ActivationRequestService::new(
                ActivationConfig::default(),
                server.encryptor(),
                JsonRequestEncoder,
            )
            .unwrap(),
        );

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    let mut request = service.create_recovery(&format!("R-{i}"), "1234").unwrap();
                    let data = ActivationData::new("device-key").unwrap();
                    service.seal(&mut request, &data).unwrap();
                    service.encode(&request).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let bytes = handle.join().unwrap();
            let body = JsonRequestEncoder::new().decode(&bytes).unwrap();
            assert_eq!(
                body.identity_attributes.get("recoveryCode"),
                Some(format!("R-{i}").as_str())
            );
            assert!(server.open(&body.activation_data).is_ok());
        }
    }

    #[test]
    fn test_sealed_request_readable_across_threads() {
        let mut request = ActivationRequest::standard("ABC-123").unwrap();
        let server = EciesDecryptor::generate_for_activation();
        let data = ActivationData::new("device-key").unwrap();
        request
            .attach_payload(server.encryptor().seal(&data.to_plaintext().unwrap()).unwrap())
            .unwrap();
        let request = Arc::new(request);

        let bodies: Vec<_> = (0..4)
            .map(|_| {
                let request = Arc::clone(&request);
                thread::spawn(move || request.serialize().unwrap())
            })
            .map(|h| h.join().unwrap())
            .collect();

        assert!(bodies.windows(2).all(|w| w[0] == w[1]));
    }
}
