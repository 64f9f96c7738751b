#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    env_logger::init();

    let code = urlo::run();
    log::debug!("Exiting with status {}", code);
    std::process::exit(code);
}
