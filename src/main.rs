use anyhow::Result;

fn main() -> Result<()> {
    git_chat::cli::run()
}
