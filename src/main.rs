use log::LevelFilter;

fn main() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    cyberdeck::util::init_logging(level);
    log::info!("booting terminal");
    yew::Renderer::<cyberdeck::components::App>::new().render();
}
