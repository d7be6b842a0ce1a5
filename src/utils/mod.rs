pub mod browser;
pub mod panic_hook;
