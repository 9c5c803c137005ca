use std::convert::Infallible;

use crate::{
    folder::{FolderDescriptor, FolderNode},
    tree::{FolderTreeBuilder, Roots},
};

pub trait FolderSource {
    type Error;

    fn list_folders(&mut self) -> Result<Vec<FolderDescriptor>, Self::Error>;
}

pub struct StaticFolders {
    folders: Vec<FolderDescriptor>,
}

impl StaticFolders {
    pub fn new(folders: Vec<FolderDescriptor>) -> Self {
        Self { folders }
    }
}

impl FolderSource for StaticFolders {
    type Error = Infallible;

    fn list_folders(&mut self) -> Result<Vec<FolderDescriptor>, Self::Error> {
        Ok(self.folders.clone())
    }
}

pub fn forest<S: FolderSource>(source: &mut S, roots: &Roots) -> Result<Vec<FolderNode>, S::Error> {
    let listing = source.list_folders()?;

    Ok(FolderTreeBuilder::build(&listing, roots))
}
