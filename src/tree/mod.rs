mod builder;
mod roots;

pub use builder::FolderTreeBuilder;
pub use roots::Roots;
