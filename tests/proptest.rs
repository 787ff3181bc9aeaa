use base32_stream::{decode, decode_iter, encode, encode_iter};
use proptest::{prelude::any, proptest};

mod utils;

use utils::{decode_pieces, InputStream, TextStream};

proptest! {
    #[test]
    fn round_trip(ref input in any::<Vec<u8>>()) {
        let encoded = encode(input);
        assert_eq!(encoded.len(), (input.len() * 8 + 4) / 5);
        assert_eq!(&decode(&encoded).unwrap(), input);
    }

    #[test]
    fn iter_encode(ref input in any::<InputStream>()) {
        let output: String = encode_iter(input.as_ref()).collect();
        assert_eq!(output, encode(input.bytes()));
    }

    #[test]
    fn iter_decode(
        ref input in any::<Vec<u8>>(),
        chunk_size in 1..20usize,
    ) {
        let encoded = encode(input);
        let text = TextStream::new(&encoded, chunk_size);
        let output = decode_pieces(decode_iter(text.as_ref()));
        assert_eq!(&output, input);
    }

    #[test]
    fn stream_encode(ref input in any::<InputStream>()) {
        let expected: Vec<String> = encode_iter(input.as_ref()).collect();
        let output = utils::stream::encode(input.stream());
        assert_eq!(output, expected);
    }

    #[test]
    fn stream_decode(
        ref input in any::<Vec<u8>>(),
        chunk_size in 1..20usize,
    ) {
        let encoded = encode(input);
        let text = TextStream::new(&encoded, chunk_size);
        let output = utils::stream::decode(text.stream());
        assert_eq!(&output, input);
    }

    #[test]
    fn stream_round_trip(ref input in any::<InputStream>()) {
        let encoded = utils::stream::encode(input.stream());
        let output = utils::stream::decode(futures::stream::iter(encoded));
        assert_eq!(output, input.bytes());
    }
}
