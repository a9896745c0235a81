//! Class-list behaviour through the public API.

use esui_dom::{
    add_class, add_classes, has_class, remove_class, toggle_class, Document, DocumentHost, NodeId,
};
use proptest::prelude::*;

fn element(class: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    let el = doc.create_element("div");
    doc.append_child(doc.root(), el).unwrap();
    doc.set_attribute(el, "id", "target");
    doc.set_attribute(el, "class", class);
    (doc, el)
}

fn tokens(doc: &Document, el: NodeId) -> Vec<String> {
    doc.attribute(el, "class")
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn arb_classes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,2}", 0..8)
}

proptest! {
    #[test]
    fn add_then_has(classes in arb_classes(), name in "[a-d]{1,2}") {
        let (mut doc, el) = element(&classes.join(" "));
        add_class(&mut doc, el, &name).unwrap();
        prop_assert!(has_class(&doc, el, &name).unwrap());
    }

    #[test]
    fn remove_then_not_has(classes in arb_classes(), name in "[a-d]{1,2}") {
        let (mut doc, el) = element(&classes.join(" "));
        remove_class(&mut doc, "target", &name).unwrap();
        prop_assert!(!has_class(&doc, el, &name).unwrap());

        let expected: Vec<String> = classes.into_iter().filter(|c| *c != name).collect();
        prop_assert_eq!(tokens(&doc, el), expected);
    }

    #[test]
    fn add_keeps_existing_order(classes in arb_classes(), name in "[e-f]{1,2}") {
        let (mut doc, el) = element(&classes.join(" "));
        add_class(&mut doc, el, &name).unwrap();
        let mut expected = classes;
        expected.push(name);
        prop_assert_eq!(tokens(&doc, el), expected);
    }

    #[test]
    fn toggle_twice_on_unique_list(classes in prop::collection::btree_set("[a-d]{1,2}", 0..6), name in "[a-d]{1,2}") {
        let original: Vec<String> = classes.into_iter().collect();
        let (mut doc, el) = element(&original.join(" "));
        let had = has_class(&doc, el, &name).unwrap();

        toggle_class(&mut doc, el, &name).unwrap();
        prop_assert_eq!(has_class(&doc, el, &name).unwrap(), !had);
        toggle_class(&mut doc, el, &name).unwrap();
        prop_assert_eq!(has_class(&doc, el, &name).unwrap(), had);

        if had {
            // Re-adding appends, so only the membership is preserved.
            let mut after = tokens(&doc, el);
            let mut before = original;
            after.sort();
            before.sort();
            prop_assert_eq!(after, before);
        } else {
            prop_assert_eq!(doc.attribute(el, "class").unwrap_or_default(), original.join(" "));
        }
    }
}

#[test]
fn widget_state_classes() {
    let (mut doc, el) = element("ui-button");
    add_classes(&mut doc, el, ["ui-button-hover", "ui-button-active"]).unwrap();
    remove_class(&mut doc, el, "ui-button-hover").unwrap();
    assert_eq!(tokens(&doc, el), vec!["ui-button", "ui-button-active"]);
}
