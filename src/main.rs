use std::rc::Rc;

mod components;
mod config;
mod dom;
mod gesture;
mod media;
mod model;
mod runtime;
mod state;
mod util;

use components::app::{App, AppProps};
use config::Config;

fn main() {
    let config = Config::load();
    util::init_logging(config.level_filter());
    log::info!(
        "lock screen starting: {} contacts, {}-digit pin",
        config.contacts.len(),
        config.pin_length
    );
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
