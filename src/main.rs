//! zulu-bloom main entrypoint.

use zulu_bloom::run;
use zulu_bloom::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
