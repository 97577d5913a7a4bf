use clap::Parser;

use autojudge_cli::cmd::Args;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Argument misuse exits 1, same as every other fatal session error.
    // Help and version requests surface as clap errors too; those keep
    // clap's own exit status of 0.
    let args = Args::try_parse().unwrap_or_else(|e| {
        use clap::error::ErrorKind;
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        }
    });

    args.exec().await.unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    });
}
