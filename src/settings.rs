use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    cli::Cli,
    core::PortalError,
    directory::DEFAULT_PAGE_SIZE,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Remote mentor JSON; the embedded list is used when unset or unreachable.
    pub mentors_url: Option<String>,
    /// Fallback request form for mentors without their own link.
    pub request_form_url: Option<String>,
    /// Path part of the share link.
    pub portal_url: String,
    pub page_size: usize,
    pub dark_mode: bool,
    /// When false the detail dialog is replaced by a notice.
    pub modal_dialogs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mentors_url: None,
            request_form_url: None,
            portal_url: "index.html".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            dark_mode: true,
            modal_dialogs: true,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default::<Settings>(SETTINGS_FILE).normalized()
    }

    pub fn save(&self) -> Result<(), PortalError> {
        save_json(self, SETTINGS_FILE)
    }

    /// Command-line flags win over the settings file.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.mentors_url {
            self.mentors_url = Some(url.clone());
        }
        if let Some(url) = &cli.request_form {
            self.request_form_url = Some(url.clone());
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self.mentors_url = self.mentors_url.filter(|url| !url.trim().is_empty());
        self.request_form_url =
            self.request_form_url.filter(|url| !url.trim().is_empty() && url != "#");
        self
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"page_size": 6}"#).unwrap();
        assert_eq!(settings, Settings { page_size: 6, ..Settings::default() });
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "mentor-portal",
            "--mentors-url",
            "https://example.org/mentors.json",
            "--request-form",
            "#",
            "--page-size",
            "0",
        ]);
        let settings = Settings::default().with_overrides(&cli);
        assert_eq!(settings.mentors_url.as_deref(), Some("https://example.org/mentors.json"));
        assert_eq!(settings.request_form_url, None);
        assert_eq!(settings.page_size, 1);
    }
}
