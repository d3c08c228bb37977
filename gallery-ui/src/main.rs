use dioxus::launch;
use dioxus_logger::tracing::Level;

use gallery_ui::views::App;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}
