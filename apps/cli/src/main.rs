fn main() -> anyhow::Result<()> {
    anki_clean::run()
}
