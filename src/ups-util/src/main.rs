use ups_util::cli;
use ups_util::utils::Colorize;
use ups_util::error_message;

pub fn main() {
    if let Err(e) = rustls::crypto::ring::default_provider().install_default() {
        error_message!("Failed to install default crypto provider: {:?}", e);
        std::process::exit(1);
    }

    if let Err(e) = cli::process_command() {
        error_message!("{:#}", e);
        std::process::exit(1);
    }
}
