//! Entry point for the WASM application

pub fn main() {
    research_week::run();
}
