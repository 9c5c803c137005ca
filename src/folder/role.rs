use std::fmt::Display;

use serde::Serialize;

use super::FolderDescriptor;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderRole {
    Inbox,
    Drafts,
    Junk,
    Trash,
    Sent,
    Generic,
}

impl FolderRole {
    const SPECIAL: [Self; 5] = [
        Self::Inbox,
        Self::Drafts,
        Self::Junk,
        Self::Trash,
        Self::Sent,
    ];

    pub fn classify(descriptor: &FolderDescriptor) -> Self {
        // special roles only live in the first two hierarchy levels
        if descriptor.segments().count() > 2 {
            return Self::Generic;
        }

        let id = descriptor.id().to_uppercase();
        let delimiter = descriptor.delimiter().as_char();
        Self::SPECIAL
            .into_iter()
            .find(|role| role.matches(&id, delimiter))
            .unwrap_or(Self::Generic)
    }

    pub fn is_generic(self) -> bool {
        matches!(self, Self::Generic)
    }

    fn matches(self, id: &str, delimiter: char) -> bool {
        if self.top_level_aliases().contains(&id) {
            return true;
        }

        id.strip_prefix("INBOX")
            .and_then(|rest| rest.strip_prefix(delimiter))
            .is_some_and(|name| self.below_inbox_aliases().contains(&name))
    }

    fn top_level_aliases(self) -> &'static [&'static str] {
        match self {
            FolderRole::Inbox => &["INBOX"],
            FolderRole::Drafts => &["DRAFTS"],
            FolderRole::Junk => &["JUNK"],
            FolderRole::Trash => &["TRASH"],
            FolderRole::Sent => &["SENT"],
            FolderRole::Generic => &[],
        }
    }

    fn below_inbox_aliases(self) -> &'static [&'static str] {
        match self {
            FolderRole::Inbox | FolderRole::Generic => &[],
            FolderRole::Drafts => &["DRAFTS", "ENTWÜRFE"],
            FolderRole::Junk => &["JUNK", "SPAM"],
            FolderRole::Trash => &["TRASH", "PAPIERKORB", "DELETED ITEMS"],
            FolderRole::Sent => &["SENT", "SENT ITEMS", "SENT MESSAGES", "GESENDET"],
        }
    }
}

impl Display for FolderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FolderRole::Inbox => write!(f, "inbox"),
            FolderRole::Drafts => write!(f, "drafts"),
            FolderRole::Junk => write!(f, "junk"),
            FolderRole::Trash => write!(f, "trash"),
            FolderRole::Sent => write!(f, "sent"),
            FolderRole::Generic => write!(f, "generic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use crate::folder::FolderDescriptorBuilder;

    use super::*;

    fn descriptor(id: &str, delimiter: char) -> FolderDescriptor {
        let mut builder = FolderDescriptorBuilder::default();
        builder.id(id.to_string());
        builder.delimiter(delimiter.into());
        builder.display_name(id.to_string());

        assert_ok!(builder.build())
    }

    #[rstest]
    #[case("INBOX", FolderRole::Inbox)]
    #[case("inbox", FolderRole::Inbox)]
    #[case("Drafts", FolderRole::Drafts)]
    #[case("TRASH", FolderRole::Trash)]
    #[case("Junk", FolderRole::Junk)]
    #[case("Sent", FolderRole::Sent)]
    fn test_classify_recognizes_top_level_aliases(#[case] id: &str, #[case] expected: FolderRole) {
        assert_eq!(expected, FolderRole::classify(&descriptor(id, '.')));
    }

    #[rstest]
    #[case("INBOX.Drafts", FolderRole::Drafts)]
    #[case("INBOX.Entwürfe", FolderRole::Drafts)]
    #[case("INBOX.Spam", FolderRole::Junk)]
    #[case("INBOX.Papierkorb", FolderRole::Trash)]
    #[case("INBOX.Deleted Items", FolderRole::Trash)]
    #[case("INBOX.Sent Messages", FolderRole::Sent)]
    #[case("inbox.gesendet", FolderRole::Sent)]
    fn test_classify_recognizes_aliases_below_inbox(
        #[case] id: &str,
        #[case] expected: FolderRole,
    ) {
        assert_eq!(expected, FolderRole::classify(&descriptor(id, '.')));
    }

    #[rstest]
    #[case("Invoices")]
    #[case("INBOX.Lists")]
    #[case("Other.Trash")]
    #[case("INBOXES")]
    fn test_classify_falls_back_to_generic(#[case] id: &str) {
        assert_eq!(FolderRole::Generic, FolderRole::classify(&descriptor(id, '.')));
    }

    #[rstest]
    fn test_classify_never_matches_below_the_second_level() {
        assert_eq!(
            FolderRole::Generic,
            FolderRole::classify(&descriptor("INBOX.Somewhere.Trash", '.'))
        );
    }

    #[rstest]
    fn test_classify_uses_the_descriptors_own_delimiter() {
        assert_eq!(FolderRole::Junk, FolderRole::classify(&descriptor("INBOX/Spam", '/')));
        assert_eq!(
            FolderRole::Generic,
            FolderRole::classify(&descriptor("INBOX/Spam", '.'))
        );
    }

    #[rstest]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::json!("sent"),
            assert_ok!(serde_json::to_value(FolderRole::Sent))
        );
    }

    #[rstest]
    fn test_is_generic_only_matches_generic() {
        assert!(FolderRole::Generic.is_generic());
        assert!(!FolderRole::Inbox.is_generic());
    }
}
