// runtime configuration - which provider, which key, which model

use crate::core::Provider;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub provider: Provider,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl Config {
    /// An explicit key wins; otherwise fall back to the provider's env vars.
    pub fn resolve(provider: Provider, api_key: Option<String>, model: Option<String>) -> Self {
        Self::resolve_with(provider, api_key, model, |name| std::env::var(name).ok())
    }

    pub fn resolve_with(
        provider: Provider,
        api_key: Option<String>,
        model: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                env_keys(provider)
                    .iter()
                    .filter_map(|name| lookup(*name))
                    .find(|v| !v.trim().is_empty())
            });

        Self {
            provider,
            api_key,
            model,
        }
    }
}

pub fn env_keys(provider: Provider) -> &'static [&'static str] {
    match provider {
        Provider::Gemini => &["API_KEY", "GEMINI_API_KEY"],
        // API_KEY is the shared name, so it works for claude too
        Provider::Claude => &["ANTHROPIC_API_KEY", "CLAUDE_API_KEY", "CLAUDE_KEY", "API_KEY"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn explicit_key_wins() {
        let config = Config::resolve_with(
            Provider::Gemini,
            Some("abc".to_string()),
            None,
            env(&[("API_KEY", "from-env")]),
        );
        assert_eq!(config.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn blank_key_is_not_a_key() {
        let config = Config::resolve_with(Provider::Claude, Some("   ".to_string()), None, env(&[]));
        assert_eq!(config.api_key, None);

        let config = Config::resolve_with(Provider::Gemini, None, None, env(&[("API_KEY", "  ")]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn provider_specific_names_come_first() {
        let vars = env(&[("API_KEY", "shared"), ("ANTHROPIC_API_KEY", "anthropic")]);
        let config = Config::resolve_with(Provider::Claude, None, None, vars);
        assert_eq!(config.api_key.as_deref(), Some("anthropic"));
    }

    #[test]
    fn api_key_works_for_every_provider() {
        for provider in [Provider::Gemini, Provider::Claude] {
            let config = Config::resolve_with(provider, None, None, env(&[("API_KEY", "shared")]));
            assert_eq!(config.api_key.as_deref(), Some("shared"));
        }
    }

    #[test]
    fn gemini_alias_is_read() {
        let config =
            Config::resolve_with(Provider::Gemini, None, None, env(&[("GEMINI_API_KEY", "g")]));
        assert_eq!(config.api_key.as_deref(), Some("g"));
    }
}
