// src/main.rs

use geomexpr::demo_programs::create_demo_programs;

fn main() {
    env_logger::init();

    for demo in create_demo_programs() {
        log::info!("running {}: {}", demo.name, demo.program);
        match demo.program.run() {
            Ok(value) => println!("{:<22} {}", demo.name, value),
            Err(e) => {
                log::warn!("{} failed: {e}", demo.name);
                println!("{:<22} error: {e}", demo.name);
            }
        }
    }
}
