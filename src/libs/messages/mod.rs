pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

// Prefix helpers for callers that need the decorated text as a value
// instead of printing it.
pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}
