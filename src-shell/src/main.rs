fn main() -> anyhow::Result<()> {
    tabcalc_lib::run()
}
