pub const PROGRAM_NAME: &str = "AWS Profile Switcher";

pub fn short() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn long() -> String {
    format!("{PROGRAM_NAME} v{}", short())
}
