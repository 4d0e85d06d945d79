use indexmap::IndexMap;
use proptest::prelude::*;
use rstest::rstest;
use xhtmlgen::{encode_attr, encode_attrs, Attr, AttrValue, Attrs};

#[rstest]
#[case("a&b", "a&amp;b")]
#[case("a<b>c", "a&lt;b&gt;c")]
#[case("say \"hi\"", "say &quot;hi&quot;")]
#[case("line\nbreak", "line&#10;break")]
#[case("carriage\rreturn", "carriage&#13;return")]
#[case("tab\there", "tab&#9;here")]
fn test_attribute_value_escaped(#[case] value: &str, #[case] expected: &str) {
    assert_eq!(
        encode_attr("title", &value.into()),
        format!("title=\"{}\"", expected)
    );
}

#[test]
fn test_name_lowercased_on_render() {
    assert_eq!(encode_attr("HREF", &"/".into()), r#"href="/""#);
}

#[test]
fn test_class_token_list_joined() {
    let value = AttrValue::from(vec!["odd", "first"]);
    assert_eq!(encode_attr("class", &value), r#"class="odd first""#);
    // the class special case only applies to class
    let value = AttrValue::from(vec!["a", "b"]);
    assert_eq!(encode_attr("rel", &value), r#"rel="a b""#);
}

#[test]
fn test_boolean_attribute() {
    let attrs = Attrs::from(vec![Attr::flag("checked")]);
    assert_eq!(encode_attrs(&attrs, " "), r#" checked="checked""#);
}

#[test]
fn test_pairs_joined_with_single_space() {
    let attrs = Attrs::from(vec![
        Attr::new("id", "x"),
        Attr::flag("multiple"),
        Attr::new("cols", 20),
    ]);
    assert_eq!(
        encode_attrs(&attrs, " "),
        r#" id="x" multiple="multiple" cols="20""#
    );
}

#[test]
fn test_map_shape_preserves_insertion_order() {
    let mut map: IndexMap<String, AttrValue> = IndexMap::new();
    map.insert("z".to_string(), "1".into());
    map.insert("a".to_string(), "2".into());
    assert_eq!(encode_attrs(&map.into(), " "), r#" z="1" a="2""#);
}

#[test]
fn test_raw_string_passed_through() {
    let attrs = Attrs::raw(r#"data-x="1" data-y="2""#);
    assert_eq!(
        encode_attrs(&attrs, " "),
        r#" data-x="1" data-y="2""#
    );
}

#[test]
fn test_prefix_not_doubled() {
    let attrs = Attrs::raw(r#" id="x""#);
    assert_eq!(encode_attrs(&attrs, " "), r#" id="x""#);
}

#[test]
fn test_empty_yields_empty() {
    assert_eq!(encode_attrs(&Attrs::none(), " "), "");
    assert_eq!(encode_attrs(&Attrs::Pairs(Vec::new()), " "), "");
}

const ENTITIES: [&str; 7] = [
    "&amp;", "&lt;", "&gt;", "&quot;", "&#10;", "&#13;", "&#9;",
];

proptest! {
    #[test]
    fn escaped_value_has_no_raw_specials(value in ".*") {
        let rendered = encode_attr("x", &AttrValue::from(value.as_str()));
        // strip the x=" prefix and the closing quote
        let inner = &rendered[3..rendered.len() - 1];
        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
        prop_assert!(!inner.contains('"'));
        prop_assert!(!inner.contains('\n'));
        prop_assert!(!inner.contains('\r'));
        prop_assert!(!inner.contains('\t'));
        for (index, _) in inner.match_indices('&') {
            let rest = &inner[index..];
            prop_assert!(ENTITIES.iter().any(|entity| rest.starts_with(entity)));
        }
    }
}
