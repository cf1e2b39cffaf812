//! XML → [`Node`] tree.
//!
//! Only the shapes the materializer needs are extracted; unknown elements
//! are kept as generic nodes so their named descendants are still reached.

use crate::error::Result;
use crate::model::{CompletionHelp, Node, NodeKind};
use roxmltree::ParsingOptions;

/// Parse an expanded document and convert its root element.
pub fn parse(text: &str) -> Result<Node> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    Ok(convert(doc.root_element()))
}

fn convert(elem: roxmltree::Node<'_, '_>) -> Node {
    let name = elem.attribute("name");
    let mut node = Node::new(NodeKind::from_tag_name(elem.tag_name().name()), name);

    node.help = find_text(elem, &["properties", "help"]);
    node.command = find_text(elem, &["command"]);
    node.completion = CompletionHelp {
        list: find_text(elem, &["properties", "completionHelp", "list"]),
        path: find_text(elem, &["properties", "completionHelp", "path"]),
        script: find_text(elem, &["properties", "completionHelp", "script"]),
    };

    node.children = if name.is_some() {
        child_elements(elem)
            .find(|c| c.has_tag_name("children"))
            .map(|group| child_elements(group).map(convert).collect())
            .unwrap_or_default()
    } else {
        child_elements(elem).map(convert).collect()
    };

    node
}

fn child_elements<'a, 'input>(
    elem: roxmltree::Node<'a, 'input>,
) -> impl Iterator<Item = roxmltree::Node<'a, 'input>> {
    elem.children().filter(|c| c.is_element())
}

/// First element reached by following `steps` from `elem`, in document order.
///
/// Every element matching a step is tried, so `properties/help` finds a
/// `help` under the second `properties` when the first has none.
fn find_path<'a, 'input>(
    elem: roxmltree::Node<'a, 'input>,
    steps: &[&str],
) -> Option<roxmltree::Node<'a, 'input>> {
    let Some((first, rest)) = steps.split_first() else {
        return Some(elem);
    };
    child_elements(elem)
        .filter(|c| c.has_tag_name(*first))
        .find_map(|c| find_path(c, rest))
}

/// Leading text of the element at `steps`; empty text counts as absent.
fn find_text(elem: roxmltree::Node<'_, '_>, steps: &[&str]) -> Option<String> {
    find_path(elem, steps)
        .map(leading_text)
        .filter(|text| !text.is_empty())
}

/// Text before the first child element, with comments and processing
/// instructions dropped and the pieces around them joined.
fn leading_text(elem: roxmltree::Node<'_, '_>) -> String {
    elem.children()
        .take_while(|c| !c.is_element())
        .filter_map(|c| if c.is_text() { c.text() } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn tag_node_fields() {
        let xml = r#"<tagNode name="interface">
            <properties>
                <help>Show interface</help>
                <completionHelp>
                    <list>eth0 eth1</list>
                    <path>interfaces ethernet</path>
                </completionHelp>
            </properties>
            <command>show-if.sh $3</command>
        </tagNode>"#;
        let node = parse(xml).unwrap();
        assert_eq!(node.kind, NodeKind::Tag);
        assert_eq!(node.name.as_deref(), Some("interface"));
        assert_eq!(node.help.as_deref(), Some("Show interface"));
        assert_eq!(node.command.as_deref(), Some("show-if.sh $3"));
        assert_eq!(node.completion.list.as_deref(), Some("eth0 eth1"));
        assert_eq!(node.completion.path.as_deref(), Some("interfaces ethernet"));
        assert_eq!(node.completion.script, None);
        assert!(node.children.is_empty());
    }

    #[test]
    fn named_children_come_from_grouping() {
        let xml = r#"<node name="show">
            <properties><help>Show</help></properties>
            <children>
                <leafNode name="version"><command>ver</command></leafNode>
                <node name="system"/>
            </children>
        </node>"#;
        let node = parse(xml).unwrap();
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec![Some("version"), Some("system")]);
        assert_eq!(node.children[0].kind, NodeKind::Leaf);
        assert_eq!(node.children[1].kind, NodeKind::Generic);
    }

    #[test]
    fn named_without_grouping_has_no_children() {
        let node = parse(r#"<node name="reset"><properties/></node>"#).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn unnamed_keeps_every_child_element() {
        let xml = r#"<interfaceDefinition>
            <node name="a"/>
            text
            <node name="b"/>
        </interfaceDefinition>"#;
        let node = parse(xml).unwrap();
        assert_eq!(node.name, None);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn empty_text_is_absent() {
        let xml = r#"<tagNode name="x">
            <properties><help></help><completionHelp><script/></completionHelp></properties>
            <command></command>
        </tagNode>"#;
        let node = parse(xml).unwrap();
        assert_eq!(node.help, None);
        assert_eq!(node.command, None);
        assert_eq!(node.completion, CompletionHelp::default());
    }

    #[test]
    fn help_found_under_later_properties() {
        let xml = r#"<node name="x">
            <properties><priority>1</priority></properties>
            <properties><help>second</help></properties>
        </node>"#;
        assert_eq!(parse(xml).unwrap().help.as_deref(), Some("second"));
    }

    #[test]
    fn comments_and_pis_inside_text_are_skipped() {
        let xml = r#"<node name="x">
            <properties><help><!-- c -->Show <?pi x?>more</help></properties>
            <command>a<!--z-->b</command>
        </node>"#;
        let node = parse(xml).unwrap();
        assert_eq!(node.help.as_deref(), Some("Show more"));
        assert_eq!(node.command.as_deref(), Some("ab"));
    }

    #[test]
    fn text_stops_at_first_child_element() {
        let xml = "<leafNode name=\"x\"><command>run<!--c--> me<b>bold</b> tail</command></leafNode>";
        assert_eq!(parse(xml).unwrap().command.as_deref(), Some("run me"));
    }

    #[test]
    fn comment_only_text_is_absent() {
        let xml = "<leafNode name=\"x\"><command><!-- todo --></command></leafNode>";
        assert_eq!(parse(xml).unwrap().command, None);
    }

    #[test]
    fn text_is_not_trimmed() {
        let xml = "<leafNode name=\"x\"><command>  run me </command></leafNode>";
        assert_eq!(parse(xml).unwrap().command.as_deref(), Some("  run me "));
    }

    #[test]
    fn entities_are_decoded() {
        let xml = "<leafNode name=\"x\"><command>a &amp;&amp; b &lt; c</command></leafNode>";
        assert_eq!(parse(xml).unwrap().command.as_deref(), Some("a && b < c"));
    }

    #[test]
    fn doctype_is_accepted() {
        let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE interfaceDefinition>\n<interfaceDefinition/>";
        assert!(parse(xml).is_ok());
    }

    #[test]
    fn malformed_is_parse_error() {
        let err = parse("<node name=\"x\"><children></node>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "Got: {err}");
    }
}
