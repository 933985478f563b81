//! interactive bikeshare trip explorer. prompts for a city and optional month and
//! day filters, then prints travel time, station, duration and user statistics.
use bikeshare::app::BikeshareApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = BikeshareApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bikeshare: {e}");
            std::process::exit(1);
        }
    }
}
