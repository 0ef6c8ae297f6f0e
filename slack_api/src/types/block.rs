//! Layout blocks carried by a message. Only rich text is modelled; every
//! other block or element kind decodes to `Other`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    RichText {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    #[serde(other)]
    Other,
}

/// A node of a rich text tree. Sections, lists, quotes and preformatted
/// runs are containers and may nest each other.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum RichTextElement {
    #[serde(rename = "rich_text_section")]
    Section {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    #[serde(rename = "rich_text_list")]
    List {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    #[serde(rename = "rich_text_quote")]
    Quote {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    #[serde(rename = "rich_text_preformatted")]
    Preformatted {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    #[serde(rename = "link")]
    Link {
        url: String,
        #[serde(default)]
        text: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl RichTextElement {
    /// Child nodes of a container, or an empty slice for leaves.
    pub fn children(&self) -> &[RichTextElement] {
        match self {
            Self::Section { elements }
            | Self::List { elements }
            | Self::Quote { elements }
            | Self::Preformatted { elements } => elements,
            Self::Link { .. } | Self::Other => &[],
        }
    }
}
