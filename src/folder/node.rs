use derive_getters::Getters;
use serde::Serialize;

use super::{FolderDescriptor, FolderRole};

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct FolderNode {
    id: String,
    #[getter(skip)]
    role: FolderRole,
    display_name: String,
    unread: u32,
    children: Vec<FolderNode>,
}

impl FolderNode {
    pub(crate) fn from_descriptor(descriptor: &FolderDescriptor, role: FolderRole) -> Self {
        Self {
            id: descriptor.id().clone(),
            role,
            display_name: descriptor.leaf_display_name().to_string(),
            unread: descriptor.unread(),
            children: Vec::new(),
        }
    }

    pub(crate) fn set_children(&mut self, children: Vec<FolderNode>) {
        self.children = children;
    }

    pub fn role(&self) -> FolderRole {
        self.role
    }
}
