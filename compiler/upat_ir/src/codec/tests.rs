use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::{Delimiter, NodeList, OriginField, StructuralToken};

fn node(id: u32, kind: NodeKind, start: u32, end: u32, ty: ContentType) -> Node {
    Node::new(NodeId::new(id), kind, Span::new(start, end), ty)
}

#[test]
fn record_layout() {
    let nodes = [node(3, NodeKind::PARAMETER, 0x0102, 0x0304, ContentType::Number)];
    let Ok(bytes) = encode(&nodes) else {
        panic!("encode failed");
    };
    assert_eq!(bytes, vec![3, 254, 0x02, 0x01, 0x04, 0x03, 249]);
}

#[test]
fn delimiter_record_uses_ascii() {
    let Ok(bytes) = encode(&[node(0, NodeKind::SLASH, 0, 1, ContentType::None)]) else {
        panic!("encode failed");
    };
    assert_eq!(bytes, vec![0, b'/', 0, 0, 1, 0, 0]);
}

#[test]
fn length_is_nodes_times_record_size() {
    let mut list = NodeList::new();
    for i in 0..10 {
        list.push(NodeKind::PATH, Span::new(i, i + 1), ContentType::None);
    }
    let Ok(bytes) = encode(list.as_slice()) else {
        panic!("encode failed");
    };
    assert_eq!(bytes.len(), 10 * RECORD_SIZE);
}

#[test]
fn empty_sequence() {
    assert_eq!(encode(&[]), Ok(vec![]));
    assert_eq!(decode(&[]), Ok(vec![]));
}

#[test]
fn too_many_nodes() {
    let nodes: Vec<Node> = (0..256)
        .map(|i| node(i, NodeKind::PATH, 0, 0, ContentType::None))
        .collect();
    assert_eq!(encode(&nodes), Err(CodecError::TooManyNodes { count: 256 }));
}

#[test]
fn id_overflow() {
    let nodes = [node(300, NodeKind::PATH, 0, 1, ContentType::None)];
    assert_eq!(encode(&nodes), Err(CodecError::IdOverflow { id: 300 }));
}

#[test]
fn offset_overflow() {
    let nodes = [node(0, NodeKind::PATH, 10, 70_000, ContentType::None)];
    assert_eq!(
        encode(&nodes),
        Err(CodecError::OffsetOverflow { id: 0, offset: 70_000 })
    );
}

#[test]
fn truncated_record() {
    assert_eq!(decode(&[0, 251, 0]), Err(CodecError::TruncatedRecord { len: 3 }));
}

#[test]
fn unknown_kind() {
    assert_eq!(
        decode(&[0, b'a', 0, 0, 1, 0, 0]),
        Err(CodecError::UnknownKind { index: 0, byte: b'a' })
    );
}

#[test]
fn unknown_content_type() {
    assert_eq!(
        decode(&[0, 251, 0, 0, 1, 0, 0, 1, 251, 1, 0, 2, 0, 9]),
        Err(CodecError::UnknownContentType { index: 1, byte: 9 })
    );
}

#[test]
fn check_spans_rejects_span_past_input() {
    let nodes = [node(0, NodeKind::PATH, 0, 9, ContentType::None)];
    assert_eq!(
        check_spans(&nodes, "abc"),
        Err(CodecError::SpanOutOfBounds {
            id: 0,
            span: Span::new(0, 9),
            len: 3
        })
    );
}

#[test]
fn check_spans_rejects_inverted_span() {
    let nodes = [node(0, NodeKind::PATH, 2, 1, ContentType::None)];
    assert!(matches!(
        check_spans(&nodes, "abc"),
        Err(CodecError::SpanOutOfBounds { id: 0, .. })
    ));
}

#[test]
fn check_spans_accepts_spans_in_bounds() {
    let nodes = [
        node(0, NodeKind::SLASH, 0, 1, ContentType::None),
        node(1, NodeKind::PATH, 1, 2, ContentType::None),
    ];
    assert_eq!(check_spans(&nodes, "/a"), Ok(()));
}

fn arb_kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        proptest::sample::select(Delimiter::ALL.to_vec()).prop_map(NodeKind::Delimiter),
        proptest::sample::select(vec![
            OriginField::Protocol,
            OriginField::Hostname,
            OriginField::Port
        ])
        .prop_map(NodeKind::Origin),
        proptest::sample::select(vec![
            StructuralToken::Path,
            StructuralToken::Variable,
            StructuralToken::Parameter,
            StructuralToken::Value,
            StructuralToken::Fragment,
            StructuralToken::Slug,
            StructuralToken::Ellipsis,
        ])
        .prop_map(NodeKind::Token),
    ]
}

fn arb_type() -> impl Strategy<Value = ContentType> {
    proptest::sample::select(vec![
        ContentType::None,
        ContentType::String,
        ContentType::Number,
        ContentType::Boolean,
        ContentType::Array,
    ])
}

fn arb_nodes() -> impl Strategy<Value = Vec<Node>> {
    proptest::collection::vec((arb_kind(), 0..=MAX_OFFSET, 0..=MAX_OFFSET, arb_type()), 0..64)
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (kind, a, b, ty))| {
                    #[allow(clippy::cast_possible_truncation, reason = "i < 64")]
                    let id = i as u32;
                    node(id, kind, a.min(b), a.max(b), ty)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn round_trip(nodes in arb_nodes()) {
        let bytes = encode(&nodes).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(bytes.len(), nodes.len() * RECORD_SIZE);
        prop_assert_eq!(decode(&bytes), Ok(nodes));
    }
}
