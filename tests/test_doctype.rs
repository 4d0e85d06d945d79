use rstest::rstest;
use xhtmlgen::{Doctype, Error};

#[rstest]
#[case(
    Doctype::Xhtml10Transitional,
    r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#
)]
#[case(
    Doctype::Xhtml10Strict,
    r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#
)]
#[case(
    Doctype::Xhtml10Frameset,
    r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#
)]
#[case(
    Doctype::Xhtml11,
    r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#
)]
#[case(
    Doctype::Html401Transitional,
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#
)]
#[case(
    Doctype::Html401Strict,
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#
)]
#[case(
    Doctype::Html401Frameset,
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#
)]
fn test_declaration(#[case] doctype: Doctype, #[case] expected: &str) {
    assert_eq!(doctype.declaration(), expected);
}

#[rstest]
#[case("XHTML 1.0 Transitional", Doctype::Xhtml10Transitional)]
#[case("XHTML 1.0 Strict", Doctype::Xhtml10Strict)]
#[case("XHTML 1.0 Frameset", Doctype::Xhtml10Frameset)]
#[case("XHTML 1.1", Doctype::Xhtml11)]
#[case("HTML 4.01 Transitional", Doctype::Html401Transitional)]
#[case("HTML 4.01 Strict", Doctype::Html401Strict)]
#[case("HTML 4.01 Frameset", Doctype::Html401Frameset)]
fn test_from_name(#[case] name: &str, #[case] expected: Doctype) {
    assert_eq!(Doctype::from_name(name), expected);
    assert_eq!(expected.name(), name);
}

#[test]
fn test_xml_flavor() {
    assert!(Doctype::Xhtml10Transitional.is_xml());
    assert!(Doctype::Xhtml11.is_xml());
    assert!(!Doctype::Html401Strict.is_xml());
}

#[test]
fn test_default_is_xhtml_transitional() {
    assert_eq!(Doctype::default(), Doctype::Xhtml10Transitional);
}

#[test]
fn test_unknown_name_falls_back_to_default() {
    assert_eq!(Doctype::from_name("HTML5"), Doctype::Xhtml10Transitional);
}

#[test]
fn test_strict_parse_rejects_unknown() {
    let err = "HTML5".parse::<Doctype>().unwrap_err();
    assert_eq!(err, Error::UnknownDoctype("HTML5".to_string()));
}
