fn main() -> anyhow::Result<()> {
    tmx_placer::run()
}
