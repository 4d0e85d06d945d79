use indexmap::IndexMap;
use xhtmlgen::{
    Attr, Attrs, Doctype, Fast, InputKind, ListData, ListKind, NodeData, OptionEntry,
    OptionLabel, OptionsData, Record, Rendered, RenderOptions,
};

fn fast() -> Fast {
    Fast::default()
}

#[test]
fn test_generic_element() {
    assert_eq!(
        fast().element("span", Attrs::none(), Some("x"), None),
        "<span>x</span>"
    );
    // block-level containers separate their content with newlines
    assert_eq!(
        fast().element("div", Attrs::none(), Some("x"), None),
        "<div>\nx\n</div>"
    );
}

#[test]
fn test_unpaired_element_by_doctype() {
    let xml = Fast::with_doctype(Doctype::Xhtml10Strict);
    let sgml = Fast::with_doctype(Doctype::Html401Strict);
    assert_eq!(xml.element("hr", Attrs::none(), None, None), "<hr />");
    assert_eq!(sgml.element("hr", Attrs::none(), None, None), "<hr>");
    assert!(xml.element("img", Attrs::none(), None, None).ends_with(" />"));
    assert!(!sgml.element("img", Attrs::none(), None, None).ends_with("/>"));
}

#[test]
fn test_unpaired_element_inline_comment() {
    assert_eq!(
        fast().element("br", Attrs::none(), None, Some("wrap")),
        "<br /><!-- wrap -->"
    );
}

#[test]
fn test_end_tag_comment() {
    assert_eq!(
        fast().end_tag("div", Some("footer")),
        "</div><!-- /footer -->"
    );
    // unpaired tags have no end tag, only the comment survives
    assert_eq!(fast().end_tag("br", Some("x")), "<!-- /x -->");
}

#[test]
fn test_list_from_items() {
    let markup = fast().list(
        ListKind::Ul,
        ListData::Items(vec!["one".into(), "two".into()]),
        Attrs::none(),
        None,
    );
    assert_eq!(markup, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>");
}

#[test]
fn test_list_from_map_keeps_order() {
    let mut map: IndexMap<String, Vec<Attr>> = IndexMap::new();
    map.insert("first".to_string(), vec![Attr::new("class", "a")]);
    map.insert("second".to_string(), Vec::new());
    let markup = fast().list(ListKind::Ol, ListData::Map(map), Attrs::none(), None);
    assert_eq!(
        markup,
        "<ol>\n<li class=\"a\">first</li>\n<li>second</li>\n</ol>"
    );
}

#[test]
fn test_list_raw_markup_passthrough() {
    let markup = fast().list(
        ListKind::Menu,
        ListData::Raw("<li>done</li>".to_string()),
        Attrs::none(),
        None,
    );
    assert_eq!(markup, "<menu>\n<li>done</li>\n</menu>");
}

#[test]
fn test_input() {
    assert_eq!(
        fast().input(InputKind::Text, "user", "bob", Attrs::none(), None),
        r#"<input type="text" name="user" value="bob" />"#
    );
}

#[test]
fn test_file_input_omits_value() {
    assert_eq!(
        fast().input(InputKind::File, "upload", "ignored", Attrs::none(), None),
        r#"<input type="file" name="upload" />"#
    );
}

#[test]
fn test_checkbox_group_with_checked_set() {
    let rendered = fast()
        .inputs(
            InputKind::Checkbox,
            "opt",
            OptionsData::values(["a", "b"]),
            &["b"],
            None,
        )
        .unwrap();
    let Rendered::List(items) = rendered else {
        panic!("expected a list");
    };
    assert_eq!(
        items,
        vec![
            r#"<label><input type="checkbox" name="opt" value="a" /> a</label>"#.to_string(),
            r#"<label><input type="checkbox" name="opt" value="b" checked="checked" /> b</label>"#
                .to_string(),
        ]
    );
}

#[test]
fn test_text_group_label_before_input() {
    let rendered = fast()
        .inputs(
            InputKind::Text,
            "field",
            OptionsData::Entries(vec![OptionEntry::labeled("v", "Value")]),
            &[],
            None,
        )
        .unwrap();
    let Rendered::List(items) = rendered else {
        panic!("expected a list");
    };
    assert_eq!(
        items,
        vec![r#"<label>Value: <input type="text" name="field" value="v" /></label>"#.to_string()]
    );
}

#[test]
fn test_hidden_group_unlabeled_by_default() {
    let rendered = fast()
        .inputs(
            InputKind::Hidden,
            "h",
            OptionsData::values(["x"]),
            &[],
            None,
        )
        .unwrap();
    assert_eq!(
        rendered,
        Rendered::List(vec![
            r#"<input type="hidden" name="h" value="x" />"#.to_string()
        ])
    );
}

#[test]
fn test_checked_ignored_for_text_inputs() {
    let rendered = fast()
        .inputs(
            InputKind::Text,
            "t",
            OptionsData::values(["x"]),
            &["x"],
            Some(false),
        )
        .unwrap();
    assert_eq!(
        rendered,
        Rendered::List(vec![
            r#"<input type="text" name="t" value="x" />"#.to_string()
        ])
    );
}

#[test]
fn test_input_group_map_shape_mirrored() {
    let mut options: IndexMap<String, OptionLabel> = IndexMap::new();
    options.insert("y".to_string(), OptionLabel::new("Yes"));
    options.insert("n".to_string(), OptionLabel::new("No"));
    let rendered = fast()
        .inputs(
            InputKind::Radio,
            "confirm",
            OptionsData::Map(options),
            &["y"],
            None,
        )
        .unwrap();
    let Rendered::Map(map) = rendered else {
        panic!("expected a map");
    };
    assert_eq!(
        map.get("y").unwrap(),
        r#"<label><input type="radio" name="confirm" value="y" checked="checked" /> Yes</label>"#
    );
    assert_eq!(
        map.get("n").unwrap(),
        r#"<label><input type="radio" name="confirm" value="n" /> No</label>"#
    );
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["y", "n"]);
}

#[test]
fn test_input_group_per_option_attrs_after_checked() {
    let rendered = fast()
        .inputs(
            InputKind::Checkbox,
            "opt",
            OptionsData::Entries(vec![
                OptionEntry::labeled("v", "V").with_attrs(vec![Attr::new("id", "opt-v")]),
            ]),
            &["v"],
            None,
        )
        .unwrap();
    // type/name/value first, then the checked flag, then per-option extras
    assert_eq!(
        rendered,
        Rendered::List(vec![
            r#"<label><input type="checkbox" name="opt" value="v" checked="checked" id="opt-v" /> V</label>"#
                .to_string()
        ])
    );
}

#[test]
fn test_input_group_map_attrs_carried() {
    let mut options: IndexMap<String, OptionLabel> = IndexMap::new();
    options.insert(
        "y".to_string(),
        OptionLabel::new("Yes").with_attrs(vec![Attr::new("class", "primary")]),
    );
    let rendered = fast()
        .inputs(InputKind::Radio, "confirm", OptionsData::Map(options), &[], None)
        .unwrap();
    let Rendered::Map(map) = rendered else {
        panic!("expected a map");
    };
    assert_eq!(
        map.get("y").unwrap(),
        r#"<label><input type="radio" name="confirm" value="y" class="primary" /> Yes</label>"#
    );
}

#[test]
fn test_input_group_rejects_raw_options() {
    let err = fast()
        .inputs(
            InputKind::Checkbox,
            "x",
            OptionsData::Raw("<input />".to_string()),
            &[],
            None,
        )
        .unwrap_err();
    assert!(matches!(err, xhtmlgen::Error::InvalidInput(_)));
}

#[test]
fn test_table_from_records() {
    let data = NodeData::Records(vec![
        Record::data(
            "thead",
            NodeData::Records(vec![Record::data(
                "tr",
                NodeData::Records(vec![Record::data("th", "H".into())]),
            )]),
        ),
        Record::data(
            "tr",
            NodeData::Records(vec![Record::data("td", "C".into())]),
        ),
    ]);
    assert_eq!(
        fast().table(data, Attrs::none(), None),
        "<table>\n<thead>\n<tr>\n<th>H</th>\n</tr>\n</thead>\n<tr>\n<td>C</td>\n</tr>\n</table>"
    );
}

#[test]
fn test_table_drops_unrecognized_tags() {
    let data = NodeData::Records(vec![
        Record::data("caption", NodeData::raw("ignored")),
        Record::data(
            "tr",
            NodeData::Records(vec![Record::data("td", "kept".into())]),
        ),
    ]);
    assert_eq!(
        fast().table(data, Attrs::none(), None),
        "<table>\n<tr>\n<td>kept</td>\n</tr>\n</table>"
    );
}

#[test]
fn test_select_membership() {
    let markup = fast().select(
        "color",
        OptionsData::values(["red", "green"]),
        &["green"],
        Attrs::none(),
        None,
    );
    assert_eq!(
        markup,
        "<select name=\"color\">\n<option value=\"red\">red</option>\n<option value=\"green\" selected=\"selected\">green</option>\n</select>"
    );
}

#[test]
fn test_optgroup_and_option() {
    let markup = fast().optgroup(
        "Primary",
        OptionsData::Entries(vec![
            OptionEntry::labeled("r", "Red"),
            OptionEntry::labeled("b", "Blue"),
        ]),
        &["b"],
        Attrs::none(),
        None,
    );
    assert_eq!(
        markup,
        "<optgroup label=\"Primary\">\n<option value=\"r\">Red</option>\n<option value=\"b\" selected=\"selected\">Blue</option>\n</optgroup>"
    );
}

#[test]
fn test_option_content_defaults_to_value() {
    assert_eq!(
        fast().option("x", None, false, Attrs::none(), None),
        r#"<option value="x">x</option>"#
    );
}

#[test]
fn test_anchor() {
    assert_eq!(
        fast().a(
            "home",
            Some("/"),
            None,
            Some("Home"),
            None,
            None,
            Attrs::none(),
            None
        ),
        r#"<a href="/" title="Home">home</a>"#
    );
}

#[test]
fn test_img_title_defaults_to_alt() {
    assert_eq!(
        fast().img("x.png", "an x", None, None, None, Attrs::none(), None),
        r#"<img src="x.png" alt="an x" title="an x" />"#
    );
}

#[test]
fn test_meta_caller_attrs_first() {
    assert_eq!(
        fast().meta(
            "text/html; charset=utf-8",
            None,
            Some("Content-Type"),
            Attrs::from(vec![Attr::new("lang", "en")]),
            None
        ),
        r#"<meta lang="en" content="text/html; charset=utf-8" http-equiv="Content-Type" />"#
    );
}

#[test]
fn test_script_cdata_guard_for_sgml() {
    let sgml = Fast::with_doctype(Doctype::Html401Strict);
    assert_eq!(
        sgml.script(Some("x = 1;"), None, None, Attrs::none(), None),
        "<script type=\"text/javascript\">\n/* <![CDATA[ */\nx = 1;\n/* ]]> */\n</script>"
    );
    let xml = Fast::with_doctype(Doctype::Xhtml10Strict);
    assert_eq!(
        xml.script(Some("x = 1;"), None, None, Attrs::none(), None),
        "<script type=\"text/javascript\">\nx = 1;\n</script>"
    );
}

#[test]
fn test_minimized_script_skips_cdata_guard() {
    let sgml = Fast::new(RenderOptions::new(Doctype::Html401Strict).minimized());
    let markup = sgml.script(Some("x = 1;"), None, None, Attrs::none(), None);
    assert!(!markup.contains("<![CDATA["));
    assert_eq!(markup, r#"<script type="text/javascript">x = 1;</script>"#);
}

#[test]
fn test_external_script_placeholder() {
    assert_eq!(
        fast().script(None, Some("app.js"), None, Attrs::none(), None),
        r#"<script type="text/javascript" src="app.js"><!-- --></script>"#
    );
}

#[test]
fn test_fieldset_label_doubles_as_comment() {
    assert_eq!(
        fast().fieldset("fields", Some("Info"), Attrs::none(), None),
        "<fieldset>\n<label>Info</label>\nfields\n</fieldset><!-- /Info -->"
    );
}

#[test]
fn test_textarea() {
    assert_eq!(
        fast().textarea("notes", "text", 20, 4, Attrs::none(), None),
        "<textarea name=\"notes\" cols=\"20\" rows=\"4\">text</textarea>"
    );
}

#[test]
fn test_minimized_output() {
    let fast = Fast::new(RenderOptions::default().minimized());
    assert_eq!(fast.comment("gone"), "");
    assert_eq!(
        fast.element("div", Attrs::none(), Some("x"), Some("gone")),
        "<div>x</div>"
    );
    let markup = fast.list(
        ListKind::Ul,
        ListData::Items(vec!["a".into(), "b".into()]),
        Attrs::none(),
        None,
    );
    assert_eq!(markup, "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn test_doctype_declaration_passthrough() {
    let fast = Fast::with_doctype(Doctype::Xhtml11);
    assert_eq!(fast.doctype_declaration(), Doctype::Xhtml11.declaration());
}
