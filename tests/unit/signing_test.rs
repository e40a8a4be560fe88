// Property-based tests for the canonical signature algorithm.
//
// The remote gateway defines correctness: byte-wise sorted keys, empty-value
// fields skipped, `&`-separated pairs terminated by `key=<secret>`, digest
// hex-encoded uppercase. Uses proptest to validate these properties across
// many generated field maps.

use proptest::prelude::*;

use wxpay::{sign, Params, SignType};

/// Generates field maps with protocol-shaped keys and non-empty values,
/// never containing the reserved `sign` key.
fn arb_params() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(
        ("[a-z_]{1,12}", "[a-zA-Z0-9]{1,16}"),
        0..8,
    )
    .prop_filter("sign is reserved", |pairs| {
        pairs.iter().all(|(k, _)| k != "sign")
    })
}

proptest! {
    #[test]
    fn test_signature_is_deterministic(pairs in arb_params(), key in "[a-z0-9]{1,16}") {
        let params: Params = pairs.iter().cloned().collect();

        prop_assert_eq!(
            sign(&params, &key, SignType::Md5),
            sign(&params, &key, SignType::Md5)
        );
    }

    #[test]
    fn test_md5_signature_is_32_uppercase_hex(pairs in arb_params(), key in "[a-z0-9]{1,16}") {
        let params: Params = pairs.iter().cloned().collect();
        let signature = sign(&params, &key, SignType::Md5);

        prop_assert_eq!(signature.len(), 32);
        prop_assert!(signature.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hmac_signature_is_64_uppercase_hex(pairs in arb_params(), key in "[a-z0-9]{1,16}") {
        let params: Params = pairs.iter().cloned().collect();
        let signature = sign(&params, &key, SignType::HmacSha256);

        prop_assert_eq!(signature.len(), 64);
        prop_assert!(signature.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_insertion_order_is_irrelevant(pairs in arb_params(), key in "[a-z0-9]{1,16}") {
        let forward: Params = pairs.iter().cloned().collect();
        let reversed: Params = pairs.iter().rev().cloned().collect();

        prop_assert_eq!(
            sign(&forward, &key, SignType::Md5),
            sign(&reversed, &key, SignType::Md5)
        );
    }

    #[test]
    fn test_empty_valued_fields_are_excluded(
        pairs in arb_params(),
        empty_key in "[a-z_]{1,12}",
        key in "[a-z0-9]{1,16}",
    ) {
        prop_assume!(empty_key != "sign");
        prop_assume!(pairs.iter().all(|(k, _)| *k != empty_key));

        let without: Params = pairs.iter().cloned().collect();
        let mut with_empty = without.clone();
        with_empty.set_string(empty_key, "");

        prop_assert_eq!(
            sign(&with_empty, &key, SignType::Md5),
            sign(&without, &key, SignType::Md5)
        );
    }
}

#[test]
fn test_spec_example_buffer() {
    // Buffer: appid=wx123&body=test&mch_id=10000&nonce_str=1000000000
    //         &out_trade_no=ORDER1&sign_type=MD5&total_fee=100&key=secretkey
    let params: Params = [
        ("appid", "wx123"),
        ("body", "test"),
        ("mch_id", "10000"),
        ("nonce_str", "1000000000"),
        ("out_trade_no", "ORDER1"),
        ("sign_type", "MD5"),
        ("total_fee", "100"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        sign(&params, "secretkey", SignType::Md5),
        "975E36CDE507222A97EADE3519349154"
    );
}
