use std::collections::HashSet;

use crate::folder::FolderDescriptor;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Roots {
    ids: HashSet<String>,
}

impl Roots {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn admits(&self, descriptor: &FolderDescriptor) -> bool {
        let delimiter = descriptor.delimiter().as_char();
        self.ids
            .iter()
            .any(|root| Self::is_path_prefix(root, descriptor, delimiter))
    }

    // prefix in whole segments: "INBOX" covers "INBOX.Sent" but not "INBOXES"
    fn is_path_prefix(root: &str, descriptor: &FolderDescriptor, delimiter: char) -> bool {
        let mut segments = descriptor.segments();
        root.split(delimiter)
            .all(|root_segment| segments.next() == Some(root_segment))
    }
}
