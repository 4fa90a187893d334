use std::path::PathBuf;

use clap::Parser;

use crate::{
    core::mentors::MentorSource,
    settings::Settings,
};

/// Searchable, filterable mentor directory.
#[derive(Debug, Parser)]
#[command(
    name = "mentor-portal",
    version,
    about = "Mentor directory with search, filters and favorites"
)]
pub struct Cli {
    /// Share link (or bare query string) to open the directory with
    #[arg(short, long)]
    pub link: Option<String>,

    /// Fetch the mentor list from this URL instead of the embedded list
    #[arg(long)]
    pub mentors_url: Option<String>,

    /// Read the mentor list from a local JSON file
    #[arg(long)]
    pub mentors_file: Option<PathBuf>,

    /// Global mentorship request form
    #[arg(long)]
    pub request_form: Option<String>,

    /// Mentors revealed per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Write a printable HTML page of the matching mentors and exit
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn mentor_source(&self, settings: &Settings) -> MentorSource {
        MentorSource { file: self.mentors_file.clone(), url: settings.mentors_url.clone() }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_link_and_export() {
        let cli = Cli::parse_from(["mentor-portal", "-l", "?q=ai", "--export", "out.html", "-v"]);
        assert_eq!(cli.link.as_deref(), Some("?q=ai"));
        assert_eq!(cli.export, Some(PathBuf::from("out.html")));
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
