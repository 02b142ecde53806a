//! The codec is shared by value across concurrent callers.

use account_nonce::NonceCodec;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_encode_decode() {
    let codec = NonceCodec::default();
    let mut handles = Vec::new();

    for task in 0..32u64 {
        handles.push(tokio::spawn(async move {
            for sequence in 0..256u64 {
                let account = task * 1000 + sequence;
                let nonce = common::encode_u64(&codec, account, sequence);
                let info = codec.decode(nonce).unwrap();
                assert_eq!(info.account_number, account.to_string());
                assert_eq!(info.sequence, sequence.to_string());
            }
            task
        }));
    }

    let mut finished = Vec::new();
    for handle in handles {
        finished.push(handle.await.unwrap());
    }
    assert_eq!(finished, (0..32).collect::<Vec<_>>());
}

#[test]
fn test_codec_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<NonceCodec>();
    assert_send_sync::<account_nonce::Nonce>();
}
