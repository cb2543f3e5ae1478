use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::logging::Verbosity;

pub const DEFAULT_OUTPUT: &str = "CHANGELOG.md";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
const API_URL_ENV: &str = "CHANGELOG_GEN_API_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub owner: String,
    pub repository: String,
    pub token: Option<String>,
    pub output: PathBuf,
    pub api_url: String,
    pub verbosity: Verbosity,
}

/// Values collected from the command line before validation.
#[derive(Debug, Clone, Default)]
pub struct ConfigInput {
    pub owner: String,
    pub repository: String,
    pub token: Option<String>,
    pub output: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    pub fn load(input: ConfigInput) -> AppResult<Self> {
        Self::resolve(input, env::var(API_URL_ENV).ok())
    }

    fn resolve(input: ConfigInput, api_url: Option<String>) -> AppResult<Self> {
        let owner = input.owner.trim().to_string();
        if owner.is_empty() {
            return Err(AppError::Configuration(
                "repository owner must not be empty".to_string(),
            ));
        }
        let repository = input.repository.trim().to_string();
        if repository.is_empty() {
            return Err(AppError::Configuration(
                "repository name must not be empty".to_string(),
            ));
        }

        let token = input
            .token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            owner,
            repository,
            token,
            output: input.output,
            api_url,
            verbosity: Verbosity::from_flag(input.verbose),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ConfigInput {
        ConfigInput {
            owner: "octo".to_string(),
            repository: "widgets".to_string(),
            token: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            verbose: false,
        }
    }

    #[test]
    fn defaults_api_url() {
        let config = AppConfig::resolve(input(), None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.output, PathBuf::from("CHANGELOG.md"));
        assert_eq!(config.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn carries_verbosity_from_flag() {
        let config = AppConfig::resolve(
            ConfigInput {
                verbose: true,
                ..input()
            },
            None,
        )
        .unwrap();
        assert!(config.verbosity.is_verbose());
    }

    #[test]
    fn strips_trailing_slash_from_api_url() {
        let config =
            AppConfig::resolve(input(), Some("https://ghe.example.com/api/v3/".to_string()))
                .unwrap();
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn blank_token_means_anonymous() {
        let config = AppConfig::resolve(
            ConfigInput {
                token: Some("  ".to_string()),
                ..input()
            },
            None,
        )
        .unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn rejects_blank_owner_or_repository() {
        let blank_owner = ConfigInput {
            owner: " ".to_string(),
            ..input()
        };
        assert!(matches!(
            AppConfig::resolve(blank_owner, None),
            Err(AppError::Configuration(_))
        ));

        let blank_repository = ConfigInput {
            repository: String::new(),
            ..input()
        };
        assert!(matches!(
            AppConfig::resolve(blank_repository, None),
            Err(AppError::Configuration(_))
        ));
    }
}
