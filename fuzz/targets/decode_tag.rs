#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nbtree::{Decoder, Encoder, Endian};

#[derive(Debug, Arbitrary)]
enum FuzzEndian {
    Big,
    Little,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    endian: FuzzEndian,
    max_depth: u8,
}

impl From<FuzzEndian> for Endian {
    fn from(v: FuzzEndian) -> Self {
        match v {
            FuzzEndian::Big => Endian::Big,
            FuzzEndian::Little => Endian::Little,
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let endian: Endian = input.endian.into();
    let max_depth = usize::from(input.max_depth).max(1);

    // Decoder не должен паниковать ни на каких данных.
    let mut decoder = Decoder::new(&input.data, endian).with_max_depth(max_depth);
    let named = match decoder.read_tag() {
        Ok(named) => named,
        Err(err) => {
            assert!(err.offset() <= input.data.len() as u64);
            return;
        }
    };
    // Разобранное дерево записывается, и повторный разбор даёт те же байты.
    let mut encoder = Encoder::new(endian).with_max_depth(max_depth);
    encoder
        .write_tag(&named)
        .expect("decoded tree must be encodable");
    let first = encoder.into_bytes();

    let again = Decoder::new(&first, endian)
        .with_max_depth(max_depth)
        .read_tag()
        .expect("encoded tree must be decodable");
    let mut encoder = Encoder::new(endian).with_max_depth(max_depth);
    encoder.write_tag(&again).expect("re-encode");
    assert_eq!(encoder.bytes(), first.as_slice());
});
