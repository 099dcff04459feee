use std::env;

use crate::constants::*;

/// Config carries all the configuration for the PreferredPictures client.
#[derive(Clone, Debug)]
pub struct Config {
    /// `identity` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PREFERRED_PICTURES_IDENTITY`]
    pub identity: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PREFERRED_PICTURES_SECRET_KEY`]
    ///
    /// The secret key is only ever used as the HMAC key and is never
    /// transmitted.
    pub secret_key: Option<String>,
    /// `max_choices` will be loaded from
    ///
    /// - env value: [`PREFERRED_PICTURES_MAX_CHOICES`]
    /// - default to `35`
    pub max_choices: usize,
    /// `endpoint` will be loaded from
    ///
    /// - env value: [`PREFERRED_PICTURES_ENDPOINT`]
    /// - default to `https://api.preferred-pictures.com/`
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity: None,
            secret_key: None,
            max_choices: DEFAULT_MAX_CHOICES,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Fields already set on the config keep their values; the default
    /// `max_choices` and `endpoint` are replaced by their env counterparts.
    pub fn from_env(mut self) -> Self {
        if let Ok(v) = env::var(PREFERRED_PICTURES_IDENTITY) {
            self.identity.get_or_insert(v);
        }
        if let Ok(v) = env::var(PREFERRED_PICTURES_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Ok(v) = env::var(PREFERRED_PICTURES_ENDPOINT) {
            if self.endpoint == DEFAULT_ENDPOINT {
                self.endpoint = v;
            }
        }
        if let Ok(v) = env::var(PREFERRED_PICTURES_MAX_CHOICES) {
            if self.max_choices == DEFAULT_MAX_CHOICES {
                if let Ok(n) = v.parse() {
                    self.max_choices = n;
                }
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.identity, None);
        assert_eq!(cfg.secret_key, None);
        assert_eq!(cfg.max_choices, 35);
        assert_eq!(cfg.endpoint, "https://api.preferred-pictures.com/");
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                (PREFERRED_PICTURES_IDENTITY, Some("env-identity")),
                (PREFERRED_PICTURES_SECRET_KEY, Some("env-secret")),
                (PREFERRED_PICTURES_ENDPOINT, Some("https://staging.example.com/")),
                (PREFERRED_PICTURES_MAX_CHOICES, Some("10")),
            ],
            || {
                let cfg = Config::default().from_env();
                assert_eq!(cfg.identity.as_deref(), Some("env-identity"));
                assert_eq!(cfg.secret_key.as_deref(), Some("env-secret"));
                assert_eq!(cfg.endpoint, "https://staging.example.com/");
                assert_eq!(cfg.max_choices, 10);
            },
        );
    }

    #[test]
    fn test_config_explicit_fields_win_over_env() {
        temp_env::with_vars(
            [
                (PREFERRED_PICTURES_IDENTITY, Some("env-identity")),
                (PREFERRED_PICTURES_SECRET_KEY, Some("env-secret")),
            ],
            || {
                let cfg = Config {
                    identity: Some("explicit-identity".to_string()),
                    ..Default::default()
                }
                .from_env();
                assert_eq!(cfg.identity.as_deref(), Some("explicit-identity"));
                assert_eq!(cfg.secret_key.as_deref(), Some("env-secret"));
            },
        );
    }

    #[test]
    fn test_config_ignores_unparseable_max_choices() {
        temp_env::with_var(PREFERRED_PICTURES_MAX_CHOICES, Some("not-a-number"), || {
            let cfg = Config::default().from_env();
            assert_eq!(cfg.max_choices, DEFAULT_MAX_CHOICES);
        });
    }
}
