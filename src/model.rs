//! Owned menu tree built from the XML definition.

/// Helper queried for live configuration nodes by `completionHelp/path`.
const LIST_ACTIVE_NODES: &str = "/bin/cli-shell-api listActiveNodes";

/// Element classification driving which templates a node gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `<tagNode>`: a command taking a value, templated under `node.tag`.
    Tag,
    /// `<leafNode>`: a terminal command.
    Leaf,
    /// Any other element (`<node>`, `<interfaceDefinition>`, groupings).
    Generic,
}

impl NodeKind {
    pub fn from_tag_name(tag: &str) -> Self {
        match tag {
            "tagNode" => Self::Tag,
            "leafNode" => Self::Leaf,
            _ => Self::Generic,
        }
    }
}

/// Sources for a tag node's value completion, from `properties/completionHelp`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionHelp {
    /// Static, space-separated list of values.
    pub list: Option<String>,
    /// Configuration path whose active children are offered.
    pub path: Option<String>,
    /// Shell snippet printing the values.
    pub script: Option<String>,
}

impl CompletionHelp {
    /// Shell expression printing the allowed values.
    ///
    /// Clauses appear in list, path, script order joined by `&&`, and the
    /// expression always ends with `&& echo`. With no sources at all the
    /// result is just ` && echo`.
    pub fn allowed(&self) -> String {
        let mut parts = Vec::new();
        if let Some(list) = &self.list {
            parts.push(format!("echo \"{list}\""));
        }
        if let Some(path) = &self.path {
            parts.push(format!("{LIST_ACTIVE_NODES} {path} | sed -e \"s/'//g\""));
        }
        if let Some(script) = &self.script {
            parts.push(script.clone());
        }
        format!("{} && echo", parts.join(" && "))
    }
}

/// One element of the menu definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// `name` attribute; unnamed nodes are transparent containers.
    pub name: Option<String>,
    /// `properties/help`
    pub help: Option<String>,
    /// `command`
    pub command: Option<String>,
    pub completion: CompletionHelp,
    /// For named nodes, the elements under `children`; for unnamed nodes,
    /// every child element.
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, name: Option<&str>) -> Self {
        Self {
            kind,
            name: name.map(str::to_string),
            help: None,
            command: None,
            completion: CompletionHelp::default(),
            children: Vec::new(),
        }
    }
}
