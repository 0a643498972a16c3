use std::borrow::Cow;

use bytes::{Buf, Bytes};

use super::SegmentedBuf;

fn segmented<'a>(segments: &'a [&'a [u8]]) -> SegmentedBuf<'a> {
    SegmentedBuf::new(segments)
}

#[test]
fn test_cursor_walk() {
    let segments: &[&[u8]] = &[b"GET ", b"", b"/ HT", b"TP/1.1"];
    let buf = segmented(segments);
    assert_eq!(buf.len(), 14);

    let mut cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.remaining(), 14);
    assert_eq!(cursor.peek(), Some(b'G'));
    assert_eq!(cursor.chunk(), b"GET ");

    cursor.advance(3);
    assert_eq!(cursor.chunk(), b" ");

    // crossing the empty segment
    cursor.advance(1);
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.chunk(), b"/ HT");

    cursor.advance(4);
    assert_eq!(cursor.chunk(), b"TP/1.1");

    cursor.advance(6);
    assert_eq!(cursor.remaining(), 0);
    assert!(!cursor.has_remaining());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.chunk(), b"");
}

#[test]
#[should_panic = "advance past the end"]
fn test_cursor_advance_past_end() {
    let segments: &[&[u8]] = &[b"ab"];
    segmented(segments).cursor().advance(3);
}

#[test]
fn test_peek_pair() {
    let segments: &[&[u8]] = &[b"ab"];
    assert_eq!(segmented(segments).cursor().peek_pair(), Some([b'a', b'b']));

    // pair straddling a boundary, with an empty segment in between
    let segments: &[&[u8]] = &[b"a", b"", b"b"];
    assert_eq!(segmented(segments).cursor().peek_pair(), Some([b'a', b'b']));

    let segments: &[&[u8]] = &[b"a"];
    assert_eq!(segmented(segments).cursor().peek_pair(), None);

    let segments: &[&[u8]] = &[];
    assert_eq!(segmented(segments).cursor().peek_pair(), None);
}

#[test]
fn test_find_across_segments() {
    let segments: &[&[u8]] = &[b"Host: exa", b"mple\r", b"\nrest"];
    let buf = segmented(segments);

    let cursor = buf.cursor();
    assert_eq!(cursor.find(b'\n'), Some(14));
    assert_eq!(cursor.find(b'\r'), Some(13));
    assert_eq!(cursor.find(b'X'), None);

    let mut cursor = buf.cursor();
    cursor.advance(10);
    assert_eq!(cursor.find(b'\n'), Some(4));
}

#[test]
fn test_materialize() {
    let segments: &[&[u8]] = &[b"abcd", b"efgh"];
    let buf = segmented(segments);

    // within one segment: borrowed
    let view = buf.cursor().materialize(4);
    assert!(matches!(view, Cow::Borrowed(b"abcd")));

    // straddling: one-time copy
    let view = buf.cursor().materialize(6);
    assert!(matches!(view, Cow::Owned(_)));
    assert_eq!(&view[..], b"abcdef");

    let mut cursor = buf.cursor();
    cursor.advance(5);
    assert!(matches!(cursor.materialize(3), Cow::Borrowed(b"fgh")));
}

#[test]
fn test_read_until() {
    let segments: &[&[u8]] = &[b"name:", b" value"];
    let buf = segmented(segments);

    let mut cursor = buf.cursor();
    let view = cursor.read_until(b':').unwrap();
    assert_eq!(&view[..], b"name");
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.chunk(), b" value");

    // absent: cursor unchanged
    assert!(cursor.read_until(b'\n').is_none());
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn test_read_until_seq() {
    let segments: &[&[u8]] = &[b"Host: a\r", b"\nNext"];
    let buf = segmented(segments);

    let mut cursor = buf.cursor();
    let view = cursor.read_until_seq(b"\r\n").unwrap();
    assert_eq!(&view[..], b"Host: a");
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.chunk(), b"Next");

    // absent: cursor unchanged
    assert!(cursor.read_until_seq(b"\r\n").is_none());
    assert_eq!(cursor.pos(), 9);

    // a false start does not hide a following match
    let segments: &[&[u8]] = &[b"a\r\r\nb"];
    let mut cursor = segmented(segments).cursor();
    let view = cursor.read_until_seq(b"\r\n").unwrap();
    assert_eq!(&view[..], b"a\r");
    assert_eq!(cursor.chunk(), b"b");
}

#[test]
fn test_bytes_segments() {
    let segments = [Bytes::from_static(b"GET / HT"), Bytes::from_static(b"TP/1.1\r\n")];
    let buf = SegmentedBuf::new(&segments);
    assert_eq!(buf.len(), 16);

    let mut cursor = buf.cursor();
    assert_eq!(cursor.find(b'\n'), Some(15));

    // ecosystem integration: drain through bytes::Buf
    assert_eq!(Buf::remaining(&cursor), 16);
    let head = cursor.copy_to_bytes(4);
    assert_eq!(&head[..], b"GET ");
    assert_eq!(Buf::chunk(&cursor), b"/ HT");
}
