fn main() -> anyhow::Result<()> {
    statekit::cli::run_cli()
}
