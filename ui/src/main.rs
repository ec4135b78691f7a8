mod components;

use components::app::App;

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Logger already initialised: {err}");
    }
    dioxus::launch(App);
}
