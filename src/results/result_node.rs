/// One rendered child of the results container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    /// Plain list item
    Item { text: String },
    /// Hyperlink, line break, description
    Link {
        text: String,
        href: String,
        desc: String,
    },
}

impl ResultNode {
    /// Plain-text lines for hosts without styling
    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            ResultNode::Item { text } => vec![format!("- {}", text)],
            ResultNode::Link { text, href, desc } => {
                vec![format!("{} <{}>", text, href), format!("  {}", desc)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_plain_lines() {
        let node = ResultNode::Item {
            text: "A".to_string(),
        };
        assert_eq!(node.plain_lines(), vec!["- A"]);
    }

    #[test]
    fn test_link_plain_lines() {
        let node = ResultNode::Link {
            text: "A".to_string(),
            href: "a.html".to_string(),
            desc: "d1".to_string(),
        };
        assert_eq!(node.plain_lines(), vec!["A <a.html>", "  d1"]);
    }
}
