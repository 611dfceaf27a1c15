use anyhow::Result;

fn main() -> Result<()> {
    dropmark::cli::run()
}
