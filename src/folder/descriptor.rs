use derive_builder::Builder;
use derive_getters::Getters;
use enumflags2::BitFlags;

use super::{Attribute, Delimiter};

#[derive(Builder, Clone, Debug, Eq, Getters, PartialEq)]
pub struct FolderDescriptor {
    id: String,
    #[getter(skip)]
    delimiter: Delimiter,
    display_name: String,
    #[builder(default)]
    unread: u32,
    #[builder(default)]
    #[getter(skip)]
    attributes: BitFlags<Attribute>,
}

impl FolderDescriptor {
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }
    pub fn attributes(&self) -> BitFlags<Attribute> {
        self.attributes
    }

    pub fn selectable(&self) -> bool {
        !self
            .attributes
            .intersects(Attribute::Noselect | Attribute::Nonexistent)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.id.split(self.delimiter.as_char())
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.id
            .rsplit_once(self.delimiter.as_char())
            .map(|(parent, _)| parent)
    }

    pub fn leaf_display_name(&self) -> &str {
        self.display_name
            .rsplit_once(self.delimiter.as_char())
            .map_or(self.display_name.as_str(), |(_, leaf)| leaf)
    }
}
