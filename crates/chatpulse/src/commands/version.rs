pub fn run() -> anyhow::Result<()> {
    println!("chatpulse {}", env!("CARGO_PKG_VERSION"));
    println!("Daily digests for group chat logs");
    Ok(())
}
