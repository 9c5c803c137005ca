mod attribute;
mod delimiter;
mod descriptor;
mod node;
mod role;

pub use attribute::Attribute;
pub use attribute::UnknownAttributeError;
pub use delimiter::Delimiter;
pub use delimiter::DelimiterError;
pub use descriptor::FolderDescriptor;
pub use descriptor::FolderDescriptorBuilder;
pub use descriptor::FolderDescriptorBuilderError;
pub use node::FolderNode;
pub use role::FolderRole;
