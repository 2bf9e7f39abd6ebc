//! `umbra` - localization lookup service and issue list utility.
//!
//! Serves translations over HTTP and maintains a local JSON issue list.

use umbra::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
