//! cuetimer entrypoint.

use cuetimer::run;
use cuetimer::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
