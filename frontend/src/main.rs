//! Entry point for the WASM application

pub fn main() {
    expense_frontend::mount();
}
