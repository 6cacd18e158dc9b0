use log::info;

/// Log how long `f` takes.
pub fn time<T>(t: &str, f: impl FnOnce() -> T) -> T {
    info!("{t}: Starting");
    let start = std::time::Instant::now();
    let r = f();
    let elapsed = start.elapsed();
    info!("{t}: Elapsed: {:?}", elapsed);
    r
}

/// Initialize stderr logging. `verbose` counts `-v` flags on top of `info`.
pub fn init_trace(verbose: u8) {
    stderrlog::new()
        .color(stderrlog::ColorChoice::Auto)
        .verbosity(2 + verbose as usize)
        .show_level(true)
        .init()
        .unwrap_or_else(|e| eprintln!("Logger already initialized: {e}"));
}
