use anyhow::Result;

fn main() -> Result<()> {
    refnet_cli::main_entry()
}
