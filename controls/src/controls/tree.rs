//! Control tree building
//!
//! Saved dashboards hold controls as a flat list in which a control may name
//! another as its parent, in any order: a child is allowed to appear before
//! its parent. The builder resolves the list into a rooted forest plus a
//! key lookup table, deferring controls whose parent has not been placed yet.
//! A full pass over the deferred controls that places none of them means the
//! parent chain can never resolve; that is a configuration error, not a
//! reason to loop.

use rustc_hash::{FxHashMap, FxHashSet};

use super::error::ControlError;
use super::types::Control;

/// A resolved forest of controls with key-based lookup
#[derive(Debug, Clone, Default)]
pub struct ControlTree {
    controls: FxHashMap<String, Control>,
    children: FxHashMap<String, Vec<String>>,
    roots: Vec<String>,
}

impl ControlTree {
    /// Build the forest from a flat definition list.
    ///
    /// Roots keep their relative input order; children attach to their
    /// parent in first-seen order. The input slice is not modified.
    pub fn build(controls: &[Control]) -> Result<Self, ControlError> {
        validate_structure(controls)?;

        let mut tree = ControlTree::default();
        let mut pending: Vec<&Control> = controls.iter().collect();

        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred: Vec<&Control> = Vec::new();

            for control in pending {
                match &control.parent {
                    Some(parent) if !tree.controls.contains_key(parent) => {
                        tracing::debug!(
                            key = %control.key,
                            parent = %parent,
                            "parent not placed yet, deferring control"
                        );
                        deferred.push(control);
                    }
                    Some(parent) => {
                        tree.children
                            .entry(parent.clone())
                            .or_default()
                            .push(control.key.clone());
                        tree.controls.insert(control.key.clone(), control.clone());
                    }
                    None => {
                        tree.roots.push(control.key.clone());
                        tree.controls.insert(control.key.clone(), control.clone());
                    }
                }
            }

            if deferred.len() == before {
                return Err(ControlError::CyclicParent {
                    keys: deferred.iter().map(|c| c.key.clone()).collect(),
                });
            }
            pending = deferred;
        }

        Ok(tree)
    }

    pub fn get(&self, key: &str) -> Option<&Control> {
        self.controls.get(key)
    }

    /// Root keys in input order
    pub fn root_keys(&self) -> &[String] {
        &self.roots
    }

    /// Root controls in input order
    pub fn roots(&self) -> impl Iterator<Item = &Control> {
        self.roots.iter().filter_map(|k| self.controls.get(k))
    }

    /// Child keys of a control in first-seen order
    pub fn child_keys(&self, key: &str) -> &[String] {
        self.children.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Child controls of a control in first-seen order
    pub fn children(&self, key: &str) -> impl Iterator<Item = &Control> {
        self.child_keys(key).iter().filter_map(|k| self.controls.get(k))
    }

    /// All transitive child keys of a control, depth-first.
    ///
    /// Used to cascade UI actions (clearing or disabling dependents) down
    /// the tree.
    pub fn descendant_keys(&self, key: &str) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_descendants(key, &mut keys);
        keys
    }

    fn collect_descendants(&self, key: &str, out: &mut Vec<String>) {
        for child in self.child_keys(key) {
            out.push(child.clone());
            self.collect_descendants(child, out);
        }
    }

    /// Locate a control anywhere in the forest, with its parent when nested
    pub fn find_with_parent(&self, key: &str) -> Option<(&Control, Option<&Control>)> {
        let control = self.get(key)?;
        let parent = control.parent.as_deref().and_then(|p| self.get(p));
        Some((control, parent))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Validate the definition list's key structure: unique keys, and every
/// parent reference naming a key present in the batch.
pub(crate) fn validate_structure(controls: &[Control]) -> Result<(), ControlError> {
    let mut keys: FxHashSet<&str> = FxHashSet::default();
    for control in controls {
        if !keys.insert(control.key.as_str()) {
            return Err(ControlError::DuplicateKey {
                key: control.key.clone(),
            });
        }
    }
    for control in controls {
        if let Some(parent) = &control.parent {
            if !keys.contains(parent.as_str()) {
                return Err(ControlError::UnknownParent {
                    key: control.key.clone(),
                    parent: parent.clone(),
                });
            }
        }
    }
    Ok(())
}
