fn main() {
    env_logger::init();

    let workspace_root = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    if let Err(error) = schedule_clock::run(workspace_root) {
        log::error!("{error}");
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
