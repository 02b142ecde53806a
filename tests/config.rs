//! Loading a codec from a config file.

use account_nonce::config::{load_config, ConfigError};
use account_nonce::{BoundaryPolicy, NonceCodec, ParsePolicy};

mod common;

#[test]
fn test_codec_from_config_file() {
    let path = common::write_temp_config(
        "legacy",
        r#"
        [nonce]
        boundary = "permissive"
        parsing = "lenient"
        "#,
    );

    let config = load_config(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let codec = NonceCodec::from_config(&config.nonce).unwrap();
    assert_eq!(codec.boundary(), BoundaryPolicy::Permissive);
    assert_eq!(codec.parsing(), ParsePolicy::Lenient);

    // Legacy behaviour end to end: trailing garbage ignored, 2^23 accepted.
    let nonce = codec.encode("8388608abc", "0").unwrap();
    assert_eq!(nonce.get(), 1 << 43);
}

#[test]
fn test_invalid_layout_in_file() {
    let path = common::write_temp_config(
        "too-wide",
        r#"
        [nonce]
        account_bits = 40
        sequence_bits = 20
        "#,
    );

    let err = load_config(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].to_string().contains("60 bits"));
        }
        other => panic!("expected validation error, got {}", other),
    }
}
