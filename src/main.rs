fn main() -> anyhow::Result<()> {
    backup_now::cli::run()
}
