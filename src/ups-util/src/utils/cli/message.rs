//! Console messages for the binary.
//! Messages go to stderr; stdout is reserved for provisioning statements.
#[macro_export]
macro_rules! error_message {
    ($($arg:tt)*) => {
        eprintln!("{} {}", "  [ERROR]".red().bold(), format!($($arg)*));
    };
}
