// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use anyhow::Result;
use atree::{Arena, Token};
use treeline::Tree;
use x509_verify::{
    der::{DerElement, Tag},
    Certificate, Settings,
};

fn describe(element: &DerElement<'_>) -> String {
    let tag = element.tag();

    if tag == Tag::OBJECT_IDENTIFIER {
        if let Ok(oid) = element.as_oid() {
            return format!("{tag} {oid}");
        }
    }

    format!(
        "{tag} ({} bytes) @{}",
        element.content_len(),
        element.offset()
    )
}

fn populate_node(
    tree: &mut Arena<String>,
    element: &DerElement<'_>,
    current_token: &Token,
) -> Result<()> {
    if !element.is_constructed() {
        return Ok(());
    }

    for child in element.children()? {
        let new_token = current_token.append(tree, describe(&child));
        populate_node(tree, &child, &new_token)?;
    }
    Ok(())
}

fn walk_tree(tree: &Arena<String>, token: &Token) -> Tree<String> {
    token.children_tokens(tree).fold(
        Tree::root(tree[*token].data.clone()),
        |mut root, entry_token| {
            if entry_token.is_leaf(tree) {
                root.push(Tree::root(tree[entry_token].data.clone()));
            } else {
                root.push(walk_tree(tree, &entry_token));
            }
            root
        },
    )
}

/// Prints tree view of the certificate's DER structure
pub fn tree(cert: &Certificate, settings: &Settings) -> Result<String> {
    let root = DerElement::parse_exact_with(cert.as_der(), &settings.der)?;

    let (mut tree, root_token) = Arena::with_data(describe(&root));
    populate_node(&mut tree, &root, &root_token)?;

    Ok(format!("Tree View:\n {}", walk_tree(&tree, &root_token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree() -> Result<()> {
        let pem = std::fs::read_to_string("tests/fixtures/leaf.pem")?;
        let cert = Certificate::from_pem(&pem)?;

        let result = tree(&cert, &Settings::default())?;
        assert!(result.contains("Tree View:"));
        assert!(result.contains("SEQUENCE (534 bytes) @0"));
        assert!(result.contains("OBJECT IDENTIFIER 1.2.840.113549.1.1.11"));
        assert!(result.contains("BIT STRING (129 bytes) @406"));
        Ok(())
    }
}
