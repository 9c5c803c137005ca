use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::{
    folder::{FolderDescriptor, FolderNode, FolderRole},
    tree::Roots,
};

pub struct FolderTreeBuilder;

struct SiblingGroup {
    parent_key: String,
    members: Vec<FolderNode>,
}

impl FolderTreeBuilder {
    pub fn build(descriptors: &[FolderDescriptor], roots: &Roots) -> Vec<FolderNode> {
        let survivors = Self::scoped(descriptors, roots);
        let roles = Self::assign_roles(&survivors);
        let groups = Self::group_by_parent(&survivors, roles);

        Self::attach(groups, roots)
    }

    fn scoped<'a>(
        descriptors: &'a [FolderDescriptor],
        roots: &Roots,
    ) -> Vec<&'a FolderDescriptor> {
        descriptors
            .iter()
            .filter(|descriptor| {
                if descriptor.selectable() {
                    true
                } else {
                    trace!("skipping unselectable folder {}", descriptor.id());
                    false
                }
            })
            .filter(|descriptor| {
                if roots.admits(descriptor) {
                    true
                } else {
                    trace!("folder {} is outside the configured roots", descriptor.id());
                    false
                }
            })
            .collect()
    }

    // first claim wins across the whole listing, later matches fall back to generic
    fn assign_roles(survivors: &[&FolderDescriptor]) -> Vec<FolderRole> {
        let mut claimed = HashSet::new();
        survivors
            .iter()
            .map(|descriptor| {
                let role = FolderRole::classify(descriptor);
                if role.is_generic() || claimed.insert(role) {
                    role
                } else {
                    debug!(
                        "role {role} already claimed, treating {} as generic",
                        descriptor.id()
                    );
                    FolderRole::Generic
                }
            })
            .collect()
    }

    fn group_by_parent(
        survivors: &[&FolderDescriptor],
        roles: Vec<FolderRole>,
    ) -> Vec<SiblingGroup> {
        let mut groups: Vec<SiblingGroup> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (descriptor, role) in survivors.iter().zip(roles) {
            let parent_key = descriptor.parent_id().unwrap_or_default();
            let node = FolderNode::from_descriptor(descriptor, role);
            if let Some(&position) = positions.get(parent_key) {
                groups[position].members.push(node);
            } else {
                positions.insert(parent_key.to_string(), groups.len());
                groups.push(SiblingGroup {
                    parent_key: parent_key.to_string(),
                    members: vec![node],
                });
            }
        }

        for group in &mut groups {
            // stable: special siblings move up front, everything else keeps listing order
            group.members.sort_by_key(|member| member.role().is_generic());
        }

        groups
    }

    fn attach(groups: Vec<SiblingGroup>, roots: &Roots) -> Vec<FolderNode> {
        let mut attached: HashSet<String> = HashSet::new();
        let mut adoptable: HashMap<String, Vec<FolderNode>> = HashMap::new();
        let mut forest = Vec::new();

        for group in groups {
            // a group's parent key is never among its own member ids
            attached.extend(group.members.iter().map(|member| member.id().clone()));
            if group.parent_key.is_empty() || roots.is_root(&group.parent_key) {
                forest.extend(group.members);
            } else if attached.contains(&group.parent_key) {
                adoptable.insert(group.parent_key, group.members);
            } else {
                debug!(
                    "parent {} missing from the listing, promoting its children to the top level",
                    group.parent_key
                );
                forest.extend(group.members);
            }
        }

        let forest = forest
            .into_iter()
            .map(|node| Self::adopt(node, &mut adoptable))
            .collect();
        debug_assert!(
            adoptable.is_empty(),
            "every parented sibling group should have been adopted"
        );

        forest
    }

    fn adopt(mut node: FolderNode, adoptable: &mut HashMap<String, Vec<FolderNode>>) -> FolderNode {
        if let Some(children) = adoptable.remove(node.id()) {
            let mut adopted = Vec::with_capacity(children.len());
            for child in children {
                adopted.push(Self::adopt(child, adoptable));
            }
            node.set_children(adopted);
        }

        node
    }
}
