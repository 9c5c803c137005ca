use derive_getters::Getters;
use serde::Deserialize;

use crate::tree::Roots;

#[derive(Debug, Deserialize, Getters)]
pub struct AccountConfig {
    #[serde(default = "default_roots")]
    roots: Vec<String>,
}

fn default_roots() -> Vec<String> {
    vec!["INBOX".to_string()]
}

impl From<&AccountConfig> for Roots {
    fn from(config: &AccountConfig) -> Self {
        Roots::new(config.roots.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_account_config_defaults_roots_to_inbox() {
        let config: AccountConfig = assert_ok!(toml::from_str(""));

        assert_eq!(&vec!["INBOX".to_string()], config.roots());
    }

    #[rstest]
    fn test_roots_from_account_config_contain_every_configured_root() {
        let config: AccountConfig =
            assert_ok!(toml::from_str(r#"roots = ["INBOX", "Shared.Support"]"#));

        let roots = Roots::from(&config);

        assert!(roots.is_root("INBOX"));
        assert!(roots.is_root("Shared.Support"));
        assert!(!roots.is_root("Archive"));
    }
}
