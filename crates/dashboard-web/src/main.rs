#[cfg(feature = "web")]
fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    console_log::init_with_level(log::Level::Info).ok();
    leptos::mount::mount_to_body(dashboard_web::app::App);
}

#[cfg(not(feature = "web"))]
fn main() {
    eprintln!("dashboard-web runs in the browser; build it with `trunk serve` (enables the web feature)");
}
