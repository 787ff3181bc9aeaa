use futures::stream::{Stream, StreamExt as _};
use futures_test::stream::StreamTestExt as _;
use proptest_derive::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct InputStream(Vec<Vec<u8>>);

impl InputStream {
    pub fn as_ref(&self) -> &[Vec<u8>] {
        &self.0
    }

    pub fn stream(&self) -> impl Stream<Item = Vec<u8>> {
        // The resulting stream here will interleave empty chunks before and after each chunk, and
        // then interleave a `Poll::Pending` between each yielded chunk, that way we test the
        // handling of these two conditions in every point of the tested stream.
        futures::stream::iter(
            self.0
                .clone()
                .into_iter()
                .flat_map(|bytes| vec![vec![], bytes])
                .chain(Some(vec![])),
        )
        .interleave_pending()
    }

    pub fn bytes_stream(&self) -> impl Stream<Item = bytes::Bytes> {
        self.stream().map(bytes::Bytes::from)
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.0.iter().flatten().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
}

impl From<[[u8; 3]; 2]> for InputStream {
    fn from(input: [[u8; 3]; 2]) -> InputStream {
        InputStream(vec![Vec::from(&input[0][..]), Vec::from(&input[1][..])])
    }
}

impl From<Vec<Vec<u8>>> for InputStream {
    fn from(input: Vec<Vec<u8>>) -> InputStream {
        InputStream(input)
    }
}

/// Text split into fragments of `chunk_size` characters.
#[derive(Debug, Clone)]
pub struct TextStream(Vec<String>);

impl TextStream {
    pub fn new(text: &str, chunk_size: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        TextStream(
            chars
                .chunks(chunk_size)
                .map(|chunk| chunk.iter().collect())
                .collect(),
        )
    }

    pub fn as_ref(&self) -> &[String] {
        &self.0
    }

    pub fn stream(&self) -> impl Stream<Item = String> {
        futures::stream::iter(
            self.0
                .clone()
                .into_iter()
                .flat_map(|text| vec![String::new(), text])
                .chain(Some(String::new())),
        )
        .interleave_pending()
    }
}

impl From<Vec<&str>> for TextStream {
    fn from(input: Vec<&str>) -> TextStream {
        TextStream(input.into_iter().map(String::from).collect())
    }
}
