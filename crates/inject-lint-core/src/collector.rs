//! Flattens host declarations into an [`ElementTree`].

use crate::classifier::{Classification, MarkerClassifier};
use crate::declaration::Declaration;
use crate::model::{Element, ElementId, ElementKind, ElementTree};
use tracing::debug;

#[derive(Clone, Copy)]
enum Slot {
    Root,
    Enclosed(ElementId),
    Parameter(ElementId),
}

/// Collects every element reachable from `roots`.
///
/// Traversal is pre-order over an explicit stack: each element precedes
/// everything it encloses, and a method or constructor is immediately
/// followed by its parameters. Collection never fails; a parameter outside
/// a method or constructor simply has no owner.
#[must_use]
pub fn collect(roots: &[Declaration], classifier: &MarkerClassifier) -> ElementTree {
    let mut tree = ElementTree::default();
    let mut stack: Vec<(&Declaration, Slot)> =
        roots.iter().rev().map(|decl| (decl, Slot::Root)).collect();

    while let Some((decl, slot)) = stack.pop() {
        let id = ElementId::new(tree.elements.len());
        let enclosing = match slot {
            Slot::Root => None,
            Slot::Enclosed(parent) | Slot::Parameter(parent) => Some(parent),
        };

        let element = Element {
            id,
            kind: decl.kind,
            name: decl.name.clone(),
            modifiers: decl.modifiers.clone(),
            enclosing,
            enclosed: Vec::new(),
            parameters: Vec::new(),
            markers: classifier.classify_all(&decl.markers),
            declared_type: decl.declared_type.clone(),
            supertypes: decl.supertypes.clone(),
            module: decl.module,
            location: decl.location.clone(),
        };
        tree.classifications.push(Classification::of(&element));
        tree.elements.push(element);
        tree.order.push(id);

        match slot {
            Slot::Root => tree.roots.push(id),
            Slot::Enclosed(parent) => tree.elements[parent.index()].enclosed.push(id),
            Slot::Parameter(owner) => {
                let owner_kind = tree.elements[owner.index()].kind;
                if decl.kind == ElementKind::Parameter && owner_kind.is_executable() {
                    tree.elements[owner.index()].parameters.push(id);
                    tree.owners.insert(id, owner);
                } else {
                    debug!(
                        "{} '{}' listed as a parameter of a {}; left unowned",
                        decl.kind, decl.name, owner_kind
                    );
                    tree.elements[owner.index()].enclosed.push(id);
                }
            }
        }

        // Pushed in reverse so they pop in declaration order, parameters first.
        for child in decl.enclosed.iter().rev() {
            stack.push((child, Slot::Enclosed(id)));
        }
        for parameter in decl.parameters.iter().rev() {
            stack.push((parameter, Slot::Parameter(id)));
        }
    }

    debug!(
        "Collected {} elements ({} owned parameters)",
        tree.len(),
        tree.owners.len()
    );
    tree
}
