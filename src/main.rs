use std::process::ExitCode;

// Single-threaded: registering the install directory rewrites the process PATH.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    lazarus_setup::run().await
}
