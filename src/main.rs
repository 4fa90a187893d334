use clap::Parser;
use mentor_portal::{
    cli::Cli,
    core::mentors::load_mentors,
    directory::{
        query::seed_state,
        Location,
    },
    gui::PortalApp,
    persistence::{
        FileStore,
        SavedFilters,
    },
    session::DirectorySession,
    settings::Settings,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("MENTOR_PORTAL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let settings = Settings::load().with_overrides(&cli);
    let mentors = load_mentors(&cli.mentor_source(&settings));
    let store = FileStore::in_app_data_dir();
    tracing::debug!("Using storage at {}", store.dir().display());

    let location = Location::parse(cli.link.as_deref().unwrap_or(&settings.portal_url));
    let state = seed_state(location.state(), SavedFilters::load(&store).as_ref());
    let session = DirectorySession::new(mentors, state, Box::new(store), location, &settings);

    if let Some(path) = &cli.export {
        if let Err(e) = session.export_printable(path) {
            tracing::error!("Export failed: {e}");
            eprintln!("Failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
        println!("{}", session.share_link());
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Mentor Portal"),
        ..Default::default()
    };

    eframe::run_native(
        "Mentor Portal",
        options,
        Box::new(move |cc| Ok(Box::new(PortalApp::new(cc, session, settings)))),
    )
}
