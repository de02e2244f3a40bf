pub mod keyboard;
pub mod labels;
pub mod machine;
pub mod session;
