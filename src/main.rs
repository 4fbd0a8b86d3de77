//! rptexport main entrypoint.

use rptexport::run;
use rptexport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
