use clap::Parser;
use wasm_bindgen::prelude::*;

mod celebration;
mod game;
mod panels;
mod theme;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Reads the arguments from the page URL, e.g. `#-vv&--celebration-delay=800`.
    fn from_location_hash(location_hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(location_hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, args_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {}", err));
        }
    }
    if let Some(err) = args_error {
        log::warn!("ignoring invalid arguments in location hash: {}", err);
    }
    log::debug!("args: {:?}", args);

    theme::Theme::init();

    let Some(root) = document().get_element_by_id("tictactoe") else {
        log::error!("Could not find id=\"tictactoe\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
