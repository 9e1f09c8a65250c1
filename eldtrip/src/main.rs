use clap::Parser;
use eldtrip::app::EldTripApp;

fn main() {
    env_logger::init();
    let args = EldTripApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running eldtrip: {e}");
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}
