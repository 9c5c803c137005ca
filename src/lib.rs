mod config;
mod folder;
mod source;
mod tree;

pub use config::AccountConfig;
pub use config::Config;
pub use config::ConfigError;
pub use folder::Attribute;
pub use folder::Delimiter;
pub use folder::DelimiterError;
pub use folder::FolderDescriptor;
pub use folder::FolderDescriptorBuilder;
pub use folder::FolderDescriptorBuilderError;
pub use folder::FolderNode;
pub use folder::FolderRole;
pub use folder::UnknownAttributeError;
pub use source::FolderSource;
pub use source::StaticFolders;
pub use source::forest;
pub use tree::FolderTreeBuilder;
pub use tree::Roots;
