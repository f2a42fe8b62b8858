fn main() -> anyhow::Result<()> {
    omnibox::cli::run()
}
