#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod app;
mod exporters;

pub use exporters::{exporter::Exporter, ndjson::NDJSON, txt::TXT};

use app::{
    options::{from_command_line, Options},
    runtime::Config,
};

fn main() {
    env_logger::init();

    // Get exporter configuration from command line
    let args = from_command_line();
    match Options::from_args(&args) {
        Ok(options) => match Config::new(options) {
            Ok(app) => {
                if let Err(why) = app.start() {
                    eprintln!("Unable to export: {why}");
                    std::process::exit(1);
                }
            }
            Err(why) => {
                eprintln!("Unable to launch: {why}");
                std::process::exit(1);
            }
        },
        Err(why) => {
            eprintln!("{why}");
            std::process::exit(2);
        }
    }
}
