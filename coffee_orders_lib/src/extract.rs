//! Pulls catalog links out of a message's rich text blocks.

use slack_api::types::{Block, RichTextElement};

/// Returns every link URL in `blocks` that contains `domain`, in document
/// order. Containers are walked to any depth; duplicates are kept.
pub fn extract_links(blocks: &[Block], domain: &str) -> Vec<String> {
    let mut links = Vec::new();
    for block in blocks {
        if let Block::RichText { elements } = block {
            for element in elements {
                collect_links(element, domain, &mut links);
            }
        }
    }
    links
}

fn collect_links(element: &RichTextElement, domain: &str, links: &mut Vec<String>) {
    match element {
        RichTextElement::Link { url, .. } => {
            if url.contains(domain) {
                links.push(url.clone());
            }
        }
        RichTextElement::Other => {}
        container => {
            for child in container.children() {
                collect_links(child, domain, links);
            }
        }
    }
}
