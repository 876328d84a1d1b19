use hostsign_canonical::Canonicalizer;
use hostsign_core::{
    generate_key_pair, Algorithm, ImportError, RequestSigner, RequestVerifier, SignatureResult,
};
use proptest::prelude::*;
use serde_json::{json, Value};

const EC_PRIVATE_PEM: &str = include_str!("fixtures/ec_private.pem");
const EC_PUBLIC_PEM: &str = include_str!("fixtures/ec_public.pem");
const RSA_PRIVATE_PEM: &str = include_str!("fixtures/rsa_private.pem");
const RSA_PUBLIC_PEM: &str = include_str!("fixtures/rsa_public.pem");

/// `openssl dgst -sha256 -sign ec_private.pem` over the canonical user-info
/// request, converted from DER to `r || s`.
const OPENSSL_EC_SIGNATURE: &str =
    "G3CJCUWdJZPpEny19Y2E5nbaXQQUXXJvWthI8cME1isFTRVaBa3OkBM9gWy2ZVlRjaainaylCQiJyiHObep+Kw==";

/// `openssl dgst -sha256 -sign rsa_private.pem` over the same bytes.
const OPENSSL_RSA_SIGNATURE: &str = "ntY4Z9bGT0dY0p/hDbPK+WkFTioHQJs1396rGE5kf83S2n4Bjw3Y8jSWKeejyij/ilzEjA+BfTqL6piNktEpWKbGnK0SMsDR+B5zj8jhz95Mx8h3hyCmEovh76xDWR0KxKaummvGVQsv4/4IQiKZ9Z3we6wIP1+oKKtrPGzIQaDIeikjA6ZMx9eG3MnglgidEzAvDQqjFUGiPhQy/yVK3M96lKdJlqu7wfeweUIPKxhzYh+7l0TNtZG4xMDDzUtFUhmVPVhkmXtiVG31WNhH07ZxTn5ntAEZDjPNljYbb1qZtVKKt7MSD3hJj7oWUC2/M1R9GKx9HpU/MLBCTZGaVg==";

/// Canonical bytes of a payload with fractional and integral floats and
/// non-ASCII text, as `JSON.stringify` writes them.
const UNICODE_CANONICAL: &str =
    r#"{"amount":1.5,"name":"José 😀","ratio":2,"timestamp":1700000000000}"#;

/// `openssl dgst -sha256 -sign ec_private.pem` over `UNICODE_CANONICAL`, as `r || s`.
const OPENSSL_EC_UNICODE_SIGNATURE: &str =
    "8ALvXGXJjegnIJ2C7ZuYyE9wN4v7yOjcQwiyVJ8HeRPQ5wTdakjpgb+f1mk+DnebekG5cGq0tmDYNxldQPsorQ==";

/// `openssl dgst -sha256 -sign rsa_private.pem` over `UNICODE_CANONICAL`.
const OPENSSL_RSA_UNICODE_SIGNATURE: &str = "msYjUhorRkXTTpLBj+VKT2xWaoXhM31+3lmQMYcWWQx5FnBL4ssWEs0J/S5tBSIwZOcAeEuEy0RW6TiAhxJqSBW5XVilsieul78UoqZ7WEdkO3oYqRpbngQpMxqtQ8AT8EpSowF2g1gXUJtA2ItBW0B3xPp6mHn3qQI+WEi9sbNmpaYZYz4mkAayyiceZIAThrXi2JDgf/yO/HUvjqcpuFqqO1njR82fVRTF9iV8LNyxu5pNuWYwN8L4ounTAIYT6jwIHmodP1D8rfjGL2eRk486BGEGqDJ770NeDaXHOdZd6iWRRWEflM3TL64MYeN8S8dnECminUYSH98HXkCT5w==";

fn frozen() -> i64 {
    1_700_000_000_000
}

fn make_canonicalizer() -> Canonicalizer {
    Canonicalizer::with_clock(frozen)
}

fn raw_base64(pem: &str) -> String {
    pem.lines().filter(|line| !line.starts_with("-----")).collect()
}

fn make_ec_signer() -> RequestSigner {
    RequestSigner::initialize(EC_PRIVATE_PEM, EC_PUBLIC_PEM)
        .unwrap()
        .with_canonicalizer(make_canonicalizer())
}

fn make_rsa_signer() -> RequestSigner {
    RequestSigner::initialize(RSA_PRIVATE_PEM, RSA_PUBLIC_PEM)
        .unwrap()
        .with_canonicalizer(make_canonicalizer())
}

fn user_info_request(request_id: &str) -> Value {
    json!({"method": "getUserInfo", "requestId": request_id})
}

fn flip_bit(signature: &str, bit: usize) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    let mut bytes = STANDARD.decode(signature).unwrap();
    let index = bit / 8 % bytes.len();
    bytes[index] ^= 1 << (bit % 8);
    STANDARD.encode(bytes)
}

#[test]
fn detects_ecdsa_pem_pair() {
    assert_eq!(make_ec_signer().algorithm(), Algorithm::EcdsaP256Sha256);
}

#[test]
fn falls_back_to_rsa() {
    assert_eq!(make_rsa_signer().algorithm(), Algorithm::RsaPkcs1v15Sha256);
}

#[test]
fn user_info_scenario() {
    let signer = make_ec_signer();
    let SignatureResult { request, signature } =
        signer.sign_request(&user_info_request("req1")).unwrap();

    let keys: Vec<&str> = request.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["method", "requestId", "timestamp"]);
    assert!(signer.verify_signature(&request, &signature));

    let tampered = json!({
        "method": "getUserInfo",
        "requestId": "req2",
        "timestamp": request["timestamp"].clone(),
    });
    assert!(!signer.verify_signature(&tampered, &signature));
}

#[test]
fn raw_and_pem_encodings_are_interchangeable() {
    let from_pem = make_ec_signer();
    let from_raw = RequestSigner::initialize(&raw_base64(EC_PRIVATE_PEM), &raw_base64(EC_PUBLIC_PEM))
        .unwrap()
        .with_canonicalizer(make_canonicalizer());
    assert_eq!(from_raw.algorithm(), from_pem.algorithm());

    let signed = from_pem.sign_request(&user_info_request("req1")).unwrap();
    assert!(from_raw.verify_signature(&signed.request, &signed.signature));

    let raw_verifier = RequestVerifier::from_public_key(&raw_base64(EC_PUBLIC_PEM)).unwrap();
    let pem_verifier = RequestVerifier::from_public_key(EC_PUBLIC_PEM).unwrap();
    assert!(raw_verifier.verify_signature(&signed.request, &signed.signature));
    assert!(pem_verifier.verify_signature(&signed.request, &signed.signature));

    let signed_raw = from_raw.sign_request(&user_info_request("req1")).unwrap();
    assert!(from_pem.verify_signature(&signed_raw.request, &signed_raw.signature));
}

#[test]
fn rsa_raw_and_pem_encodings_are_interchangeable() {
    let from_raw =
        RequestSigner::initialize(&raw_base64(RSA_PRIVATE_PEM), &raw_base64(RSA_PUBLIC_PEM))
            .unwrap()
            .with_canonicalizer(make_canonicalizer());
    let signed = from_raw.sign_request(&user_info_request("req1")).unwrap();
    assert!(make_rsa_signer().verify_signature(&signed.request, &signed.signature));
}

#[test]
fn verifies_openssl_signatures() {
    let request = json!({"method": "getUserInfo", "requestId": "req1", "timestamp": 1_700_000_000_000_i64});
    assert!(make_ec_signer().verify_signature(&request, OPENSSL_EC_SIGNATURE));
    assert!(make_rsa_signer().verify_signature(&request, OPENSSL_RSA_SIGNATURE));
}

#[test]
fn floats_and_non_ascii_text_match_openssl_signatures() {
    let request: Value =
        serde_json::from_str(r#"{"name":"José 😀","amount":1.5,"ratio":2.0,"timestamp":1700000000000}"#)
            .unwrap();
    let canonical = make_canonicalizer().canonicalize(&request).unwrap();
    assert_eq!(String::from_utf8(canonical.bytes).unwrap(), UNICODE_CANONICAL);

    assert!(make_ec_signer().verify_signature(&request, OPENSSL_EC_UNICODE_SIGNATURE));
    assert!(make_rsa_signer().verify_signature(&request, OPENSSL_RSA_UNICODE_SIGNATURE));

    let signed = make_rsa_signer().sign_request(&request).unwrap();
    assert_eq!(signed.signature, OPENSSL_RSA_UNICODE_SIGNATURE);
}

#[test]
fn rsa_signatures_are_deterministic() {
    let signer = make_rsa_signer();
    let first = signer.sign_request(&user_info_request("req1")).unwrap();
    let second = signer.sign_request(&user_info_request("req1")).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.signature, OPENSSL_RSA_SIGNATURE);
}

#[test]
fn raw_unordered_data_verifies_when_timestamp_is_present() {
    let signer = RequestSigner::initialize(EC_PRIVATE_PEM, EC_PUBLIC_PEM).unwrap();
    let original = json!({"timestamp": 5, "z": [1, 2], "a": {"y": 1, "x": 2}});
    let signed = signer.sign_request(&original).unwrap();
    assert!(signer.verify_signature(&original, &signed.signature));
    assert!(signer.verify_signature(&signed.request, &signed.signature));
}

#[test]
fn malformed_signature_is_false_not_error() {
    let signer = make_ec_signer();
    assert!(!signer.verify_signature(&user_info_request("req1"), "not-valid-base64!!"));
    assert!(!signer.verify_signature(&user_info_request("req1"), ""));
    assert!(!signer.verify_signature(&user_info_request("req1"), "AAAA"));
}

#[test]
fn signature_from_other_algorithm_is_false() {
    let rsa = make_rsa_signer().sign_request(&user_info_request("req1")).unwrap();
    assert!(!make_ec_signer().verify_signature(&rsa.request, &rsa.signature));

    let ec = make_ec_signer().sign_request(&user_info_request("req1")).unwrap();
    assert!(!make_rsa_signer().verify_signature(&ec.request, &ec.signature));
}

#[test]
fn rsa_bit_flips_are_rejected() {
    let signer = make_rsa_signer();
    let signed = signer.sign_request(&user_info_request("req1")).unwrap();
    for bit in [0, 7, 1000, 2047] {
        assert!(!signer.verify_signature(&signed.request, &flip_bit(&signed.signature, bit)));
    }
}

#[test]
fn truncated_private_key_fails_import() {
    let raw = raw_base64(EC_PRIVATE_PEM);
    for len in [100, 101, 150] {
        let err = RequestSigner::initialize(&raw[..len], EC_PUBLIC_PEM).unwrap_err();
        assert!(matches!(
            err,
            ImportError::Encoding { .. } | ImportError::Unsupported { .. }
        ));
    }
}

#[test]
fn mixed_algorithms_are_rejected_with_actionable_message() {
    let err = RequestSigner::initialize(EC_PRIVATE_PEM, RSA_PUBLIC_PEM).unwrap_err();
    match &err {
        ImportError::Unsupported { attempts } => {
            assert_eq!(attempts.len(), 2);
            assert!(attempts[0].starts_with("ECDSA-P256-SHA256: public key"));
            assert!(attempts[1].starts_with("RSA-PKCS1v15-SHA256: private key"));
        }
        other => panic!("unexpected error: {other}"),
    }
    let message = err.to_string();
    for needle in ["PKCS#8", "SPKI", "raw base64", "PEM", "ECDSA P-256", "RSA PKCS#1 v1.5"] {
        assert!(message.contains(needle), "missing {needle:?} in {message}");
    }
}

#[test]
fn generated_pair_round_trips() {
    let pair = generate_key_pair().unwrap();
    let signer = RequestSigner::initialize(&pair.private_key, &pair.public_key).unwrap();
    assert_eq!(signer.algorithm(), Algorithm::EcdsaP256Sha256);

    let signed = signer.sign_request(&json!({"method": "ping"})).unwrap();
    assert!(signer.verify_signature(&signed.request, &signed.signature));

    let pem_signer = RequestSigner::initialize(&pair.private_key_pem(), &pair.public_key_pem()).unwrap();
    assert!(pem_signer.verify_signature(&signed.request, &signed.signature));
}

#[test]
fn generated_pairs_are_distinct() {
    let a = generate_key_pair().unwrap();
    let b = generate_key_pair().unwrap();
    assert_ne!(a.private_key, b.private_key);
}

#[test]
fn debug_output_redacts_private_key() {
    let rendered = format!("{:?}", make_ec_signer());
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains(&raw_base64(EC_PRIVATE_PEM)[..32]));
}

#[test]
fn signer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestSigner>();
    assert_send_sync::<RequestVerifier>();

    let signer = make_ec_signer();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let signer = &signer;
            scope.spawn(move || {
                let request = user_info_request(&format!("req{i}"));
                let signed = signer.sign_request(&request).unwrap();
                assert!(signer.verify_signature(&signed.request, &signed.signature));
            });
        }
    });
}

#[test]
fn envelope_serializes_as_request_and_signature() {
    let signed = make_ec_signer().sign_request(&user_info_request("req1")).unwrap();
    let encoded = serde_json::to_value(&signed).unwrap();
    assert_eq!(encoded["request"]["method"], "getUserInfo");
    assert!(encoded["signature"].is_string());
    let decoded: SignatureResult = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, signed);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ecdsa_bit_flips_are_rejected(bit in 0usize..512, id in "[a-z0-9]{1,12}") {
        let signer = make_ec_signer();
        let signed = signer.sign_request(&user_info_request(&id)).unwrap();
        prop_assert!(signer.verify_signature(&signed.request, &signed.signature));
        prop_assert!(!signer.verify_signature(&signed.request, &flip_bit(&signed.signature, bit)));
    }
}
