use crate::{
    error::{DecodeError, ErrorKind, Result},
    input::Slice,
    Tag,
};

#[test]
fn reads_big_endian() -> Result<()> {
    let data = [
        0x12, 0x34, // i16
        0x00, 0x00, 0x01, 0x00, // i32
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, // i64
    ];
    let mut input = Slice::new(&data);

    assert_eq!(input.consume_i16()?, 0x1234);
    assert_eq!(input.consume_i32()?, 256);
    assert_eq!(input.consume_i64()?, -2);
    assert!(input.is_empty());
    Ok(())
}

#[test]
fn reads_floats() -> Result<()> {
    let mut data = vec![];
    data.extend_from_slice(&1.5f32.to_be_bytes());
    data.extend_from_slice(&(-0.25f64).to_be_bytes());
    let mut input = Slice::new(&data);

    assert_eq!(input.consume_f32()?, 1.5);
    assert_eq!(input.consume_f64()?, -0.25);
    Ok(())
}

#[test]
fn signed_values_are_twos_complement() -> Result<()> {
    let data = [0x80, 0xff, 0xff];
    let mut input = Slice::new(&data);

    assert_eq!(input.consume_i8()?, i8::MIN);
    assert_eq!(input.peek(|s| s.consume_u16())?, u16::MAX);
    assert_eq!(input.consume_i16()?, -1);
    Ok(())
}

#[test]
fn short_read_does_not_advance() {
    let data = [0x00, 0x01, 0x02];
    let mut input = Slice::new(&data);

    let res = input.consume_i32();
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::NoData));
    assert_eq!(input.remaining(), 3);

    // The cursor is still usable after the failure.
    assert_eq!(input.consume_u16().unwrap(), 1);
    assert_eq!(input.remaining(), 1);
}

#[test]
fn peek_does_not_advance() -> Result<()> {
    let data = [10, 0];
    let input = Slice::new(&data);

    assert_eq!(input.peek_byte()?, 10);
    assert_eq!(input.peek_tag()?, Tag::Compound);
    assert_eq!(input.remaining(), 2);
    Ok(())
}

#[test]
fn unknown_tag_is_not_consumed() {
    let data = [13];
    let mut input = Slice::new(&data);

    let err = input.consume_tag().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownTag(13));
    assert_eq!(input.remaining(), 1);
}

#[test]
fn str_length_is_in_bytes() -> Result<()> {
    let data = [0x00, 0x02, 0xc3, 0xa9, 0xff];
    let mut input = Slice::new(&data);

    assert_eq!(input.consume_str()?, "é");
    assert_eq!(input.remaining(), 1);
    Ok(())
}

#[test]
fn truncated_str_does_not_advance() {
    let data = [0x00, 0x05, b'a', b'b'];
    let mut input = Slice::new(&data);

    assert!(input.consume_str().unwrap_err().is_no_data());
    assert_eq!(input.remaining(), 4);
}

#[test]
fn nonunicode_str() {
    let data = [0x00, 0x02, 0xc3, 0x28];
    let mut input = Slice::new(&data);

    let err = input.consume_str().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::BadDecode(DecodeError::Nonunicode(vec![0xc3, 0x28]))
    );
    assert_eq!(input.remaining(), 4);
}

#[test]
fn negative_len_rejected() {
    let data = (-1i32).to_be_bytes();
    let mut input = Slice::new(&data);

    let err = input.consume_len().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::BadDecode(DecodeError::NegativeLength(-1))
    );
}
