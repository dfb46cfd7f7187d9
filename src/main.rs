fn main() -> anyhow::Result<()> {
    startup_sunsets::cli::run()
}
