#![no_main]
use libfuzzer_sys::fuzz_target;

use futures::stream::StreamExt as _;
use futures_test::stream::StreamTestExt as _;
use base32_stream::{encode, encode_stream, decode_stream};
use bytes::Bytes;

fuzz_target!(|data: Vec<Vec<u8>>| {
    futures::executor::block_on(async move {
        let expected: Vec<u8> = data.iter().flatten().copied().collect();
        let stream = futures::stream::iter(data.into_iter().map(Bytes::from));
        let encoded: Vec<String> = encode_stream(stream.interleave_pending()).collect().await;
        assert_eq!(encoded.concat(), encode(&expected));

        let decoder = decode_stream(futures::stream::iter(encoded).interleave_pending());
        let decoded: Vec<u8> = decoder
            .map(|piece| futures::stream::iter(piece.unwrap()))
            .flatten()
            .collect()
            .await;
        assert_eq!(expected, decoded);
    });
});
