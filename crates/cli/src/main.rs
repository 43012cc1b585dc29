fn main() -> Result<(), Box<dyn std::error::Error>> {
    collscope_cli::run()
}
